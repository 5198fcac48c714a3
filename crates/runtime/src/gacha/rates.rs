use serde::{Deserialize, Serialize};

/// Rate constants for one banner family. Rates are percentages.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub five_star_base_rate: f64,

    // +soft_ramp_step per pull from soft_pity_start, +steep_ramp_step from steep_pity_start
    pub soft_pity_start: u32,
    pub soft_ramp_step: f64,
    pub steep_pity_start: u32,
    pub steep_ramp_step: f64,
    pub five_star_hard_pity: u32,

    pub four_star_rate: f64,
    pub four_star_hard_pity: u32,

    /// Probability, in `[0, 1]`, that an unguaranteed 5★/4★ lands on the featured side.
    pub featured_chance: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            five_star_base_rate: 0.8,

            soft_pity_start: 60,
            soft_ramp_step: 1.0,
            steep_pity_start: 70,
            steep_ramp_step: 10.0,
            five_star_hard_pity: 80,

            four_star_rate: 6.0,
            four_star_hard_pity: 10,

            featured_chance: 0.5,
        }
    }
}

impl RateTable {
    /// Chance of a 5★ on a pull made at `pity5`, in `[base, 100.0]`.
    ///
    /// Non-decreasing in `pity5`. The steep ramp overshoots 100 on the last
    /// pull before hard pity; that value is clamped.
    pub fn five_star_rate(&self, pity5: u32) -> f64 {
        if pity5 >= self.five_star_hard_pity {
            return 100.0;
        }

        let rate = if pity5 >= self.steep_pity_start {
            let steps = (pity5 + 1).saturating_sub(self.steep_pity_start);
            self.five_star_base_rate + f64::from(steps) * self.steep_ramp_step
        } else if pity5 >= self.soft_pity_start {
            let steps = (pity5 + 1).saturating_sub(self.soft_pity_start);
            self.five_star_base_rate + f64::from(steps) * self.soft_ramp_step
        } else {
            self.five_star_base_rate
        };

        rate.min(100.0)
    }

    /// The 5★ rate for every pity value up to and including hard pity.
    pub fn five_star_curve(&self) -> Vec<(u32, f64)> {
        (1..=self.five_star_hard_pity)
            .map(|pity| (pity, self.five_star_rate(pity)))
            .collect()
    }
}

/// [`RateTable::five_star_rate`] on the default table.
pub fn five_star_rate(pity5: u32) -> f64 {
    RateTable::default().five_star_rate(pity5)
}
