//! Renders wallbox readings in the Prometheus text exposition format.
//!
//! Metric names, kinds and number formats are a fixed schema that scrape
//! consumers depend on. Each metric is written as a blank line, a
//! `# TYPE <name> <kind>` line and a `<name> <value>` line.

use crate::readings::{LifetimeStats, Vitals};
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::Counter => f.write_str("counter"),
            MetricKind::Gauge => f.write_str("gauge"),
        }
    }
}

/// Sample value together with its fixed rendering
#[derive(Debug, Clone, Copy, PartialEq)]
enum Sample {
    Flag(bool),
    Signed(i64),
    Unsigned(u64),
    OneDecimal(f64),
    ThreeDecimals(f64),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Sample::Flag(value) => write!(f, "{}", u8::from(value)),
            Sample::Signed(value) => write!(f, "{value}"),
            Sample::Unsigned(value) => write!(f, "{value}"),
            Sample::OneDecimal(value) => write!(f, "{value:.1}"),
            Sample::ThreeDecimals(value) => write!(f, "{value:.3}"),
        }
    }
}

fn write_metric(out: &mut String, name: &str, kind: MetricKind, sample: Sample) {
    // Writing into a String cannot fail
    let _ = write!(out, "\n# TYPE {name} {kind}\n{name} {sample}\n");
}

pub fn format_vitals(vitals: &Vitals) -> String {
    use MetricKind::Gauge;
    use Sample::*;

    let metrics = [
        ("contactor_closed", Flag(vitals.contactor_closed)),
        ("vehicle_connected", Flag(vitals.vehicle_connected)),
        ("session_duration", Unsigned(vitals.session_duration)),
        ("session_energy", ThreeDecimals(vitals.session_energy)),
        ("grid_voltage", ThreeDecimals(vitals.grid_voltage)),
        ("grid_frequency", ThreeDecimals(vitals.grid_frequency)),
        ("vehicle_current", ThreeDecimals(vitals.vehicle_current)),
        ("phase_a_current", ThreeDecimals(vitals.phase_a_current)),
        ("phase_b_current", ThreeDecimals(vitals.phase_b_current)),
        ("phase_c_current", ThreeDecimals(vitals.phase_c_current)),
        ("neutral_current", ThreeDecimals(vitals.neutral_current)),
        ("phase_a_voltage", ThreeDecimals(vitals.phase_a_voltage)),
        ("phase_b_voltage", ThreeDecimals(vitals.phase_b_voltage)),
        ("phase_c_voltage", ThreeDecimals(vitals.phase_c_voltage)),
        ("relay_coil_voltage", ThreeDecimals(vitals.relay_coil_voltage)),
        ("pcb_temperature", OneDecimal(vitals.pcb_temperature)),
        ("handle_temperature", OneDecimal(vitals.handle_temperature)),
        ("mcu_temperature", ThreeDecimals(vitals.mcu_temperature)),
        ("uptime", Unsigned(vitals.uptime)),
        ("proximity_voltage", OneDecimal(vitals.proximity_voltage)),
        ("pilot_high_voltage", OneDecimal(vitals.pilot_high_voltage)),
        ("pilot_low_voltage", OneDecimal(vitals.pilot_low_voltage)),
        ("config_status", Signed(vitals.config_status)),
        ("evse_state", Signed(vitals.evse_state)),
    ];

    let mut out = String::with_capacity(metrics.len() * 64);
    for (name, sample) in metrics {
        write_metric(&mut out, name, Gauge, sample);
    }
    out
}

pub fn format_lifetime_stats(stats: &LifetimeStats) -> String {
    use MetricKind::{Counter, Gauge};
    use Sample::*;

    let metrics = [
        ("contactor_cycles", Counter, Unsigned(stats.contactor_cycles)),
        (
            "contactor_cycles_loaded",
            Counter,
            Unsigned(stats.contactor_cycles_loaded),
        ),
        ("connector_cycles", Counter, Unsigned(stats.connector_cycles)),
        ("thermal_foldbacks", Counter, Unsigned(stats.thermal_foldbacks)),
        (
            "average_startup_temperature",
            Gauge,
            OneDecimal(stats.average_startup_temperature),
        ),
        (
            "started_charging_sessions",
            Counter,
            Unsigned(stats.started_charging_sessions),
        ),
        ("dispensed_energy", Counter, Unsigned(stats.dispensed_energy)),
        ("total_uptime", Counter, Unsigned(stats.total_uptime)),
        ("total_charging_time", Counter, Unsigned(stats.charging_time)),
    ];

    let mut out = String::with_capacity(metrics.len() * 64);
    for (name, kind, sample) in metrics {
        write_metric(&mut out, name, kind, sample);
    }
    out
}
