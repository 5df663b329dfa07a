//! Severity scales shared by several record types.

labeled_enum! {
    /// Four-step risk rating used by contracts, policies and compliance items.
    pub enum RiskLevel {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

labeled_enum! {
    /// Work priority used by tasks, disputes and compliance items.
    pub enum Priority {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

impl RiskLevel {
    /// `High` and `Critical` count as elevated on summary cards.
    pub fn is_elevated(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}
