//! System Health Page
//!
//! Operational snapshots: overall health, KPIs, health checks, the daily
//! digest, and recent alerts. Everything renders from the latest fetched
//! snapshot with per-field fallbacks; nothing on this page mutates state.

use leptos::*;

use crate::model::snapshot::{kpi_display, CheckReport, DailyDigest};
use crate::model::summary::ordered_stage_counts;
use crate::state::global::GlobalState;

/// Number of alerts shown in the recent-alerts panel. Counts elsewhere
/// still reflect the full feed.
const ALERT_DISPLAY_LIMIT: usize = 5;

/// System health page component
#[component]
pub fn SystemHealthPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"System Health"</h1>
                <p class="text-gray-400 mt-1">"Operational status, KPIs, and alerts"</p>
            </div>

            <OverviewCards />
            <KpiPanel />
            <HealthCheckRow />
            <DigestPanel />
            <RecentAlerts />
        </div>
    }
}

/// System overview cards
#[component]
fn OverviewCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let health = state.system_health;

    view! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            // Overall status
            <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                <div class="flex items-center justify-between text-sm text-gray-400">
                    <span>"System Status"</span>
                    <span>"🖥"</span>
                </div>
                {move || match health.get() {
                    Some(snapshot) => {
                        let dot = if snapshot.is_healthy() { "bg-green-500" } else { "bg-red-500" };
                        view! {
                            <div class="flex items-center space-x-2 mt-2">
                                <span class=format!("w-3 h-3 rounded-full {}", dot) />
                                <span class="text-2xl font-bold capitalize">
                                    {snapshot.status_label().to_string()}
                                </span>
                            </div>
                        }.into_view()
                    }
                    None => view! {
                        <div class="text-2xl font-bold text-gray-500 mt-2">"Loading..."</div>
                    }.into_view(),
                }}
            </div>

            // Database record count
            <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                <div class="flex items-center justify-between text-sm text-gray-400">
                    <span>"Database"</span>
                    <span>"🗄"</span>
                </div>
                <div class="text-2xl font-bold mt-2">
                    {move || {
                        health.get()
                            .map(|snapshot| snapshot.health_checks.database.lead_count)
                            .unwrap_or(0)
                    }}
                </div>
                <p class="text-xs text-gray-500">"Total Records"</p>
            </div>

            // Active alerts
            <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                <div class="flex items-center justify-between text-sm text-gray-400">
                    <span>"Active Alerts"</span>
                    <span>"⚠"</span>
                </div>
                <div class="text-2xl font-bold text-orange-500 mt-2">
                    {move || {
                        health.get()
                            .map(|snapshot| snapshot.active_alerts_count)
                            .unwrap_or(0)
                    }}
                </div>
                <p class="text-xs text-gray-500">
                    {move || {
                        let critical = health.get()
                            .map(|snapshot| snapshot.critical_alerts_count)
                            .unwrap_or(0);
                        format!("{} Critical", critical)
                    }}
                </p>
            </div>

            // Backend version
            <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                <div class="flex items-center justify-between text-sm text-gray-400">
                    <span>"Version"</span>
                    <span>"📡"</span>
                </div>
                <div class="text-2xl font-bold mt-2">
                    {move || {
                        health.get()
                            .map(|snapshot| snapshot.version_label().to_string())
                            .unwrap_or_else(|| "N/A".to_string())
                    }}
                </div>
                <p class="text-xs text-gray-500">"Current Build"</p>
            </div>
        </div>
    }
}

/// KPI panel with progress bars against targets
#[component]
fn KpiPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let kpis = state.kpis;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-1">"📈 Key Performance Indicators"</h2>
            <p class="text-gray-400 text-sm mb-4">"Business metrics and performance targets"</p>

            {move || match kpis.get() {
                None => view! {
                    <p class="text-gray-400 text-sm">"No KPI data available"</p>
                }.into_view(),
                Some(set) => {
                    let conversion = set.docs_to_consult_conversion;
                    let conversion_ok = conversion >= 60.0;

                    let consent = set.consent_compliance_rate;
                    let consent_ok = consent >= 100.0;

                    let automation = set.automation_success_rate();
                    let automation_ok = automation >= 99.0;

                    let docs_days = set.median_docs_completion_days;
                    let docs_ok = docs_days <= 5.0;
                    let docs_percent = (5.0 - docs_days) / 5.0 * 100.0;

                    let overrun = set.consult_overrun_rate;
                    let overrun_ok = overrun <= 10.0;
                    let overrun_percent = (10.0 - overrun) / 10.0 * 100.0;

                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <KpiBar
                                label="Docs to Consult Conversion"
                                target="Target: 60%"
                                percent=conversion
                                on_target=conversion_ok
                                display=format!("{:.0}%", conversion)
                            />
                            <KpiBar
                                label="Consent Compliance"
                                target="Target: 100%"
                                percent=consent
                                on_target=consent_ok
                                display=format!("{:.0}%", consent)
                            />
                            <KpiBar
                                label="Automation Success"
                                target="Target: >99%"
                                percent=automation
                                on_target=automation_ok
                                display=format!("{:.0}%", automation)
                            />
                            <KpiBar
                                label="Docs Completion Time"
                                target="Target: <5 days"
                                percent=docs_percent
                                on_target=docs_ok
                                display=format!("{:.0} days", docs_days)
                            />
                            <KpiBar
                                label="Consult Efficiency"
                                target="Target: <10% overrun"
                                percent=overrun_percent
                                on_target=overrun_ok
                                display=format!("{:.0}%", overrun)
                            />
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

/// One KPI with a progress bar against its target
#[component]
fn KpiBar(
    label: &'static str,
    target: &'static str,
    /// Bar fill percent; clamped to 0..=100 for rendering
    percent: f64,
    on_target: bool,
    #[prop(into)]
    display: String,
) -> impl IntoView {
    let width = percent.clamp(0.0, 100.0);
    let fill = if on_target { "bg-green-500" } else { "bg-orange-500" };

    view! {
        <div class="space-y-2">
            <div class="flex justify-between">
                <span class="text-sm font-medium">{label}</span>
                <span class="text-sm text-gray-400">{target}</span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-2">
                <div
                    class=format!("h-2 rounded-full {}", fill)
                    style=format!("width: {:.0}%", width)
                />
            </div>
            <span class="text-lg font-bold">{display}</span>
        </div>
    }
}

/// The three named health checks
#[component]
fn HealthCheckRow() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let health = state.system_health;

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            {move || {
                let checks = health.get().map(|snapshot| snapshot.health_checks).unwrap_or_default();
                let database_count = checks.database.lead_count;
                let error_count = checks.error_rate.recent_errors;
                let alert_count = checks.alerts.active_alerts;
                view! {
                    <CheckCard
                        title="🗄 Database Health"
                        report=checks.database
                        count_label="Lead Count"
                        count=database_count
                    />
                    <CheckCard
                        title="🛡 Error Monitoring"
                        report=checks.error_rate
                        count_label="Recent Errors"
                        count=error_count
                    />
                    <CheckCard
                        title="⚠ Alert Status"
                        report=checks.alerts
                        count_label="Active Alerts"
                        count=alert_count
                    />
                }
            }}
        </div>
    }
}

/// One health check card
#[component]
fn CheckCard(
    title: &'static str,
    report: CheckReport,
    count_label: &'static str,
    count: u64,
) -> impl IntoView {
    let badge = if report.is_healthy() { "bg-green-600" } else { "bg-red-600" };

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <h3 class="font-semibold mb-3">{title}</h3>
            <div class="space-y-2 text-sm">
                <div class="flex justify-between items-center">
                    <span>"Status"</span>
                    <span class=format!("{} text-white text-xs px-2 py-0.5 rounded-full capitalize", badge)>
                        {report.status_label().to_string()}
                    </span>
                </div>
                <div class="flex justify-between items-center">
                    <span>{count_label}</span>
                    <span class="font-mono">{count}</span>
                </div>
            </div>
        </div>
    }
}

/// Daily operational summary
#[component]
fn DigestPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let digest = state.digest;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-1">"📊 Daily Operational Summary"</h2>
            <p class="text-gray-400 text-sm mb-4">
                {move || digest.get().unwrap_or_default().date_label()}
            </p>

            {move || {
                let digest = digest.get().unwrap_or_default();
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <PipelineSection digest=digest.clone() />
                        <ActivitySection digest=digest.clone() />
                        <HealthSection digest=digest.clone() />
                        <KpiSection digest=digest />
                    </div>
                }
            }}
        </section>
    }
}

/// Lead pipeline counts by stage
#[component]
fn PipelineSection(digest: DailyDigest) -> impl IntoView {
    let counts = digest
        .lead_counts
        .filter(|map| !map.is_empty())
        .map(|map| ordered_stage_counts(&map));

    view! {
        <div class="space-y-3">
            <h4 class="font-semibold">"👥 Lead Pipeline"</h4>
            {match counts {
                Some(entries) => entries.into_iter().map(|(stage, count)| view! {
                    <div class="flex justify-between items-center text-sm">
                        <span class="capitalize">{stage.name()}</span>
                        <span class="border border-gray-600 rounded-full px-2 py-0.5 text-xs">{count}</span>
                    </div>
                }).collect_view(),
                None => view! {
                    <p class="text-sm text-gray-400">"No pipeline data available"</p>
                }.into_view(),
            }}
            <div class="border-t border-gray-700 pt-2 flex justify-between items-center font-medium text-sm">
                <span>"Total Leads"</span>
                <span class="bg-gray-600 rounded-full px-2 py-0.5 text-xs">{digest.total_leads}</span>
            </div>
        </div>
    }
}

/// Event counts from the last day
#[component]
fn ActivitySection(digest: DailyDigest) -> impl IntoView {
    let activity = digest.recent_activity.filter(|map| !map.is_empty());

    view! {
        <div class="space-y-3">
            <h4 class="font-semibold">"⚡ Recent Activity"</h4>
            {match activity {
                Some(events) => events.into_iter().map(|(event, count)| {
                    let badge = if event == "ALERT" { "bg-red-600" } else { "bg-gray-600" };
                    view! {
                        <div class="flex justify-between items-center text-sm">
                            <span>{event}</span>
                            <span class=format!("{} text-white rounded-full px-2 py-0.5 text-xs", badge)>
                                {count}
                            </span>
                        </div>
                    }
                }).collect_view(),
                None => view! {
                    <p class="text-sm text-gray-400">"No activity data available"</p>
                }.into_view(),
            }}
        </div>
    }
}

/// Digest-level health summary
#[component]
fn HealthSection(digest: DailyDigest) -> impl IntoView {
    let badge = if digest.is_healthy() { "bg-green-600" } else { "bg-red-600" };
    let label = digest.health_label().to_string();

    view! {
        <div class="space-y-3">
            <h4 class="font-semibold">"🛡 System Health"</h4>
            <div class="flex justify-between items-center text-sm">
                <span>"Overall Status"</span>
                <span class=format!("{} text-white rounded-full px-2 py-0.5 text-xs capitalize", badge)>
                    {label}
                </span>
            </div>
            <div class="flex justify-between items-center text-sm">
                <span>"Active Alerts"</span>
                <span class="border border-gray-600 rounded-full px-2 py-0.5 text-xs">
                    {digest.active_alerts}
                </span>
            </div>
        </div>
    }
}

/// Digest KPI summary
#[component]
fn KpiSection(digest: DailyDigest) -> impl IntoView {
    let kpis = digest.kpis.filter(|map| !map.is_empty());

    view! {
        <div class="space-y-3">
            <h4 class="font-semibold">"📈 Key Metrics"</h4>
            {match kpis {
                Some(metrics) => metrics.into_iter().map(|(metric, value)| {
                    let display = kpi_display(&metric, &value);
                    let label = metric.replace('_', " ");
                    view! {
                        <div class="flex justify-between items-center text-sm">
                            <span class="capitalize">{label}</span>
                            <span class="border border-gray-600 rounded-full px-2 py-0.5 text-xs">
                                {display}
                            </span>
                        </div>
                    }
                }).collect_view(),
                None => view! {
                    <p class="text-sm text-gray-400">"No KPI data available"</p>
                }.into_view(),
            }}
        </div>
    }
}

/// The most recent alerts
#[component]
fn RecentAlerts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let alerts = state.alerts;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-1">"🚨 Recent Alerts"</h2>
            <p class="text-gray-400 text-sm mb-4">"Latest system alerts and warnings"</p>

            {move || {
                let feed = alerts.get().unwrap_or_default();
                if feed.alerts.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-center py-4">"No alerts to display"</p>
                    }.into_view();
                }

                let shown = feed.alerts.len().min(ALERT_DISPLAY_LIMIT);
                let total = feed.total_count.max(feed.alerts.len() as u64);

                view! {
                    <div class="space-y-3">
                        {feed.alerts.iter().take(ALERT_DISPLAY_LIMIT).map(|alert| {
                            let tone = if alert.is_critical() { "text-red-500" } else { "text-orange-500" };
                            let badge = if alert.is_critical() { "bg-red-600" } else { "bg-gray-600" };
                            view! {
                                <div class="flex items-center justify-between p-3 border border-gray-700 rounded-lg">
                                    <div class="flex items-center space-x-3">
                                        <span class=format!("text-lg {}", tone)>"⚠"</span>
                                        <div>
                                            <p class="font-medium">{alert.message_label().to_string()}</p>
                                            <p class="text-sm text-gray-400">{alert.timestamp_label()}</p>
                                        </div>
                                    </div>
                                    <span class=format!("{} text-white text-xs px-2 py-0.5 rounded-full", badge)>
                                        {alert.severity_label().to_string()}
                                    </span>
                                </div>
                            }
                        }).collect_view()}

                        {(total as usize > shown).then(|| view! {
                            <p class="text-gray-500 text-xs">
                                {format!("Showing {} of {} alerts", shown, total)}
                            </p>
                        })}
                    </div>
                }.into_view()
            }}
        </section>
    }
}
