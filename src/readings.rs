use serde_derive::{Deserialize, Serialize};

/// Point-in-time snapshot returned by `/api/1/vitals`.
///
/// Every field defaults to zero so a failed fetch yields a zero-valued
/// reading that still formats cleanly.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vitals {
    pub contactor_closed: bool,
    pub vehicle_connected: bool,
    #[serde(rename = "session_s")]
    pub session_duration: u64,
    #[serde(rename = "grid_v")]
    pub grid_voltage: f64,
    #[serde(rename = "grid_hz")]
    pub grid_frequency: f64,
    #[serde(rename = "vehicle_current_a")]
    pub vehicle_current: f64,
    #[serde(rename = "currentA_a")]
    pub phase_a_current: f64,
    #[serde(rename = "currentB_a")]
    pub phase_b_current: f64,
    #[serde(rename = "currentC_a")]
    pub phase_c_current: f64,
    #[serde(rename = "currentN_a")]
    pub neutral_current: f64,
    #[serde(rename = "voltageA_v")]
    pub phase_a_voltage: f64,
    #[serde(rename = "voltageB_v")]
    pub phase_b_voltage: f64,
    #[serde(rename = "voltageC_v")]
    pub phase_c_voltage: f64,
    #[serde(rename = "relay_coil_v")]
    pub relay_coil_voltage: f64,
    #[serde(rename = "pcba_temp_c")]
    pub pcb_temperature: f64,
    #[serde(rename = "handle_temp_c")]
    pub handle_temperature: f64,
    #[serde(rename = "mcu_temp_c")]
    pub mcu_temperature: f64,
    #[serde(rename = "uptime_s")]
    pub uptime: u64,
    #[serde(rename = "prox_v")]
    pub proximity_voltage: f64,
    #[serde(rename = "pilot_high_v")]
    pub pilot_high_voltage: f64,
    #[serde(rename = "pilot_low_v")]
    pub pilot_low_voltage: f64,
    /// Energy delivered in the current session, in Wh
    #[serde(rename = "session_energy_wh")]
    pub session_energy: f64,
    pub config_status: i64,
    pub evse_state: i64,
}

/// Cumulative counters returned by `/api/1/lifetime`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeStats {
    pub contactor_cycles: u64,
    pub contactor_cycles_loaded: u64,
    pub connector_cycles: u64,
    pub thermal_foldbacks: u64,
    #[serde(rename = "avg_startup_temp")]
    pub average_startup_temperature: f64,
    #[serde(rename = "charge_starts")]
    pub started_charging_sessions: u64,
    /// Energy dispensed since manufacture, in Wh
    #[serde(rename = "energy_wh")]
    pub dispensed_energy: u64,
    #[serde(rename = "uptime_s")]
    pub total_uptime: u64,
    #[serde(rename = "charging_time_s")]
    pub charging_time: u64,
}
