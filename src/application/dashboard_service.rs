// Dashboard service - Use case for assembling the benchmark dashboard
//
// Every query expression, label, unit, and threshold below is a literal
// constant. The vertical offset is threaded explicitly through the ordered
// section builders so each section can be laid out and tested in isolation.
use crate::application::panel_factory::{create_row, create_stat, create_timeseries};
use crate::domain::dashboard::Dashboard;
use crate::domain::panel::{Color, GridPos, Panel, Unit};

const CHART_SECTION_HEIGHT: u32 = 8;
const STAT_SECTION_HEIGHT: u32 = 4;

/// A section builder receives the current vertical offset and returns its
/// panels (header first) together with the next free offset.
type SectionFn = fn(u32) -> (Vec<Panel>, u32);

const SECTIONS: [SectionFn; 7] = [
    overview,
    container_resources,
    jvm_gc,
    redis_performance,
    redis_resources,
    envoy,
    quick_stats,
];

pub fn build_dashboard() -> Dashboard {
    let mut panels = Vec::new();
    let mut y = 0;
    for build in SECTIONS {
        let (mut section, next_y) = build(y);
        tracing::debug!(
            "section '{}' at y={} emitted {} panels",
            section[0].title(),
            y,
            section.len()
        );
        panels.append(&mut section);
        y = next_y;
    }

    Dashboard {
        uid: "ratelimit-benchmark".to_string(),
        title: "Redis Rate Limit Benchmark (Enhanced v2)".to_string(),
        tags: vec![
            "benchmark".to_string(),
            "redis".to_string(),
            "grpc".to_string(),
            "envoy".to_string(),
            "bottleneck".to_string(),
        ],
        timezone: "browser".to_string(),
        schema_version: 38,
        version: 4,
        refresh: "5s".to_string(),
        panels,
    }
}

fn overview(y: u32) -> (Vec<Panel>, u32) {
    let content_y = y + 1;
    let panels = vec![
        create_row("📊 Overview - Throughput & Latency & Errors", y),
        create_timeseries(
            "Total Throughput (RPS)",
            Unit::RequestsPerSecond,
            &[
                ("sum(irate(ratelimit_requests_total[1m]))", "App RPS"),
                (
                    "sum(irate(envoy_http_grpc_downstream_rq_total[1m]))",
                    "Envoy RPS",
                ),
            ],
            GridPos::new(8, 8, 0, content_y),
            None,
        ),
        create_timeseries(
            "End-to-End Latency",
            Unit::Milliseconds,
            &[
                (
                    "histogram_quantile(0.50, sum(rate(envoy_http_grpc_downstream_rq_time_bucket[1m])) by (le))",
                    "P50",
                ),
                (
                    "histogram_quantile(0.95, sum(rate(envoy_http_grpc_downstream_rq_time_bucket[1m])) by (le))",
                    "P95",
                ),
                (
                    "histogram_quantile(0.99, sum(rate(envoy_http_grpc_downstream_rq_time_bucket[1m])) by (le))",
                    "P99",
                ),
            ],
            GridPos::new(8, 8, 8, content_y),
            None,
        ),
        create_timeseries(
            "Error Rate (%)",
            Unit::Percent,
            &[(
                "sum(irate(ratelimit_redis_errors_total[1m])) / sum(irate(ratelimit_requests_total[1m])) * 100",
                "Redis Errors %",
            )],
            GridPos::new(8, 8, 16, content_y),
            Some(&[
                (Color::Green, None),
                (Color::Yellow, Some(1.0)),
                (Color::Red, Some(5.0)),
            ]),
        ),
    ];
    (panels, content_y + CHART_SECTION_HEIGHT)
}

fn container_resources(y: u32) -> (Vec<Panel>, u32) {
    let content_y = y + 1;
    let panels = vec![
        create_row("🔥 Container Resources (Bottleneck Detection)", y),
        create_timeseries(
            "Container CPU Usage (%)",
            Unit::Percent,
            &[
                (
                    "rate(container_cpu_usage_seconds_total{name=~\"ratelimit-app-.*\"}[1m]) * 100",
                    "{{name}}",
                ),
                (
                    "rate(container_cpu_usage_seconds_total{name=\"redis-benchmark\"}[1m]) * 100",
                    "Redis",
                ),
            ],
            GridPos::new(8, 8, 0, content_y),
            Some(&[
                (Color::Green, None),
                (Color::Yellow, Some(70.0)),
                (Color::Red, Some(90.0)),
            ]),
        ),
        create_timeseries(
            "Container Memory",
            Unit::Bytes,
            &[
                (
                    "container_memory_usage_bytes{name=~\"ratelimit-app-.*\"}",
                    "{{name}}",
                ),
                ("container_memory_usage_bytes{name=\"redis-benchmark\"}", "Redis"),
            ],
            GridPos::new(8, 8, 8, content_y),
            None,
        ),
        create_timeseries(
            "Latency Breakdown (Overhead)",
            Unit::Milliseconds,
            &[
                (
                    "histogram_quantile(0.99, sum(rate(envoy_http_grpc_downstream_rq_time_bucket[1m])) by (le))",
                    "Total P99",
                ),
                (
                    "histogram_quantile(0.99, sum(rate(ratelimit_redis_latency_seconds_bucket[1m])) by (le)) * 1000",
                    "Redis P99",
                ),
                (
                    "histogram_quantile(0.99, sum(rate(envoy_http_grpc_downstream_rq_time_bucket[1m])) by (le)) - histogram_quantile(0.99, sum(rate(ratelimit_redis_latency_seconds_bucket[1m])) by (le)) * 1000",
                    "App Overhead P99",
                ),
            ],
            GridPos::new(8, 8, 16, content_y),
            None,
        ),
    ];
    (panels, content_y + CHART_SECTION_HEIGHT)
}

fn jvm_gc(y: u32) -> (Vec<Panel>, u32) {
    let content_y = y + 1;
    let panels = vec![
        create_row("☕ JVM & GC Pressure", y),
        create_timeseries(
            "GC Pressure (%)",
            Unit::Percent,
            &[(
                "sum(rate(jvm_gc_pause_seconds_sum[1m])) by (instance) * 100",
                "GC % - {{instance}}",
            )],
            GridPos::new(8, 8, 0, content_y),
            Some(&[
                (Color::Green, None),
                (Color::Yellow, Some(5.0)),
                (Color::Red, Some(10.0)),
            ]),
        ),
        create_timeseries(
            "JVM Heap Memory",
            Unit::Bytes,
            &[
                (
                    "sum(jvm_memory_used_bytes{area=\"heap\"}) by (instance)",
                    "Used - {{instance}}",
                ),
                (
                    "sum(jvm_memory_max_bytes{area=\"heap\"}) by (instance)",
                    "Max - {{instance}}",
                ),
            ],
            GridPos::new(8, 8, 8, content_y),
            None,
        ),
        create_timeseries(
            "Thread Count",
            Unit::Short,
            &[
                ("app_thread_active", "Active - {{instance}}"),
                ("jvm_threads_live_threads", "JVM Live - {{instance}}"),
            ],
            GridPos::new(8, 8, 16, content_y),
            None,
        ),
    ];
    (panels, content_y + CHART_SECTION_HEIGHT)
}

fn redis_performance(y: u32) -> (Vec<Panel>, u32) {
    let content_y = y + 1;
    let panels = vec![
        create_row("🔴 Redis Performance", y),
        create_timeseries(
            "Redis Latency (App Side)",
            Unit::Milliseconds,
            &[
                (
                    "irate(ratelimit_redis_latency_seconds_sum[1m]) / irate(ratelimit_redis_latency_seconds_count[1m]) * 1000",
                    "Avg",
                ),
                (
                    "histogram_quantile(0.95, sum(rate(ratelimit_redis_latency_seconds_bucket[1m])) by (le)) * 1000",
                    "P95",
                ),
                (
                    "histogram_quantile(0.99, sum(rate(ratelimit_redis_latency_seconds_bucket[1m])) by (le)) * 1000",
                    "P99",
                ),
            ],
            GridPos::new(8, 8, 0, content_y),
            None,
        ),
        create_timeseries(
            "Redis Ops/sec",
            Unit::OpsPerSecond,
            &[("irate(redis_commands_processed_total[1m])", "Commands/sec")],
            GridPos::new(8, 8, 8, content_y),
            None,
        ),
        create_timeseries(
            "Redis CPU",
            Unit::Short,
            &[(
                "rate(redis_cpu_sys_seconds_total[1m]) + rate(redis_cpu_user_seconds_total[1m])",
                "Total CPU Cores",
            )],
            GridPos::new(8, 8, 16, content_y),
            None,
        ),
    ];
    (panels, content_y + CHART_SECTION_HEIGHT)
}

fn redis_resources(y: u32) -> (Vec<Panel>, u32) {
    let content_y = y + 1;
    let panels = vec![
        create_row("🔴 Redis Resources", y),
        create_timeseries(
            "Redis Memory",
            Unit::Bytes,
            &[
                ("redis_memory_used_bytes", "Used"),
                ("redis_memory_max_bytes", "Max"),
                ("redis_memory_used_rss_bytes", "RSS"),
            ],
            GridPos::new(8, 12, 0, content_y),
            None,
        ),
        create_timeseries(
            "Redis Connections & Keys",
            Unit::Short,
            &[
                ("redis_connected_clients", "Clients"),
                ("redis_db_keys{db=\"db0\"}", "Keys"),
            ],
            GridPos::new(8, 12, 12, content_y),
            None,
        ),
    ];
    (panels, content_y + CHART_SECTION_HEIGHT)
}

fn envoy(y: u32) -> (Vec<Panel>, u32) {
    let content_y = y + 1;
    let panels = vec![
        create_row("🌐 Envoy Load Balancer", y),
        create_timeseries(
            "Envoy RPS by Status",
            Unit::RequestsPerSecond,
            &[
                ("sum(irate(envoy_http_grpc_downstream_rq_2xx[1m]))", "2xx"),
                ("sum(irate(envoy_http_grpc_downstream_rq_4xx[1m]))", "4xx"),
                ("sum(irate(envoy_http_grpc_downstream_rq_5xx[1m]))", "5xx"),
            ],
            GridPos::new(8, 8, 0, content_y),
            None,
        ),
        create_timeseries(
            "Envoy Traffic: Downstream vs Upstream",
            Unit::RequestsPerSecond,
            &[
                (
                    "sum(irate(envoy_http_grpc_downstream_rq_total[1m]))",
                    "Downstream (Total)",
                ),
                (
                    "sum(irate(envoy_cluster_upstream_rq_total{envoy_cluster_name=\"grpc_backend\"}[1m]))",
                    "Upstream (Total)",
                ),
            ],
            GridPos::new(8, 8, 8, content_y),
            None,
        ),
        create_timeseries(
            "Envoy Connections",
            Unit::Short,
            &[(
                "envoy_cluster_upstream_cx_active{envoy_cluster_name=\"grpc_backend\"}",
                "Active Conns",
            )],
            GridPos::new(8, 8, 16, content_y),
            None,
        ),
    ];
    (panels, content_y + CHART_SECTION_HEIGHT)
}

fn quick_stats(y: u32) -> (Vec<Panel>, u32) {
    let content_y = y + 1;
    let panels = vec![
        create_row("📈 Quick Stats", y),
        create_stat(
            "RPS",
            Unit::RequestsPerSecond,
            "sum(irate(ratelimit_requests_total[1m]))",
            GridPos::new(4, 6, 0, content_y),
            &[
                (Color::Red, None),
                (Color::Yellow, Some(1000.0)),
                (Color::Green, Some(5000.0)),
            ],
        ),
        create_stat(
            "P99 Latency",
            Unit::Milliseconds,
            "histogram_quantile(0.99, sum(rate(envoy_http_grpc_downstream_rq_time_bucket[1m])) by (le))",
            GridPos::new(4, 6, 6, content_y),
            &[
                (Color::Green, None),
                (Color::Yellow, Some(20.0)),
                (Color::Red, Some(100.0)),
            ],
        ),
        create_stat(
            "Error %",
            Unit::Percent,
            "sum(irate(ratelimit_redis_errors_total[1m])) / sum(irate(ratelimit_requests_total[1m])) * 100 or vector(0)",
            GridPos::new(4, 6, 12, content_y),
            &[
                (Color::Green, None),
                (Color::Yellow, Some(1.0)),
                (Color::Red, Some(5.0)),
            ],
        ),
        create_stat(
            "GC %",
            Unit::Percent,
            "sum(rate(jvm_gc_pause_seconds_sum[1m])) * 100",
            GridPos::new(4, 6, 18, content_y),
            &[
                (Color::Green, None),
                (Color::Yellow, Some(5.0)),
                (Color::Red, Some(10.0)),
            ],
        ),
    ];
    (panels, content_y + STAT_SECTION_HEIGHT)
}
