/// PowerBudget policy for power supply sizing
///
/// Estimated draw is CPU TDP + GPU board power + a fixed allowance for the rest of the
/// system. The recommended PSU rating adds 20% headroom on top, rounded to the
/// nearest watt.
pub struct PowerBudget;

impl PowerBudget {
    /// Assumed CPU TDP when the catalog has none (watts)
    pub const DEFAULT_CPU_TDP: f64 = 65.0;

    /// Assumed GPU board power when the catalog has none (watts)
    pub const DEFAULT_GPU_POWER: f64 = 150.0;

    /// Motherboard, memory, storage and fans (watts)
    pub const SYSTEM_ALLOWANCE: f64 = 150.0;

    pub const HEADROOM: f64 = 1.2;

    pub fn estimated_draw(cpu_tdp: Option<f64>, gpu_power: Option<f64>) -> f64 {
        cpu_tdp.unwrap_or(Self::DEFAULT_CPU_TDP)
            + gpu_power.unwrap_or(Self::DEFAULT_GPU_POWER)
            + Self::SYSTEM_ALLOWANCE
    }

    pub fn recommended_wattage(estimated_draw: f64) -> f64 {
        (estimated_draw * Self::HEADROOM).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_draw_with_values() {
        assert_eq!(PowerBudget::estimated_draw(Some(65.0), Some(150.0)), 365.0);
        assert_eq!(PowerBudget::estimated_draw(Some(120.0), Some(320.0)), 590.0);
    }

    #[test]
    fn test_estimated_draw_uses_defaults() {
        assert_eq!(PowerBudget::estimated_draw(None, None), 365.0);
        assert_eq!(PowerBudget::estimated_draw(Some(105.0), None), 405.0);
    }

    #[test]
    fn test_recommended_wattage_rounds() {
        assert_eq!(PowerBudget::recommended_wattage(365.0), 438.0);
        // 401 * 1.2 = 481.2
        assert_eq!(PowerBudget::recommended_wattage(401.0), 481.0);
        // 403 * 1.2 = 483.6
        assert_eq!(PowerBudget::recommended_wattage(403.0), 484.0);
    }
}
