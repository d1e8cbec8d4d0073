//! User-visible strings.
//!
//! Everything the card draws or reports goes through [`Translator`]; the
//! built-in table covers French and English with French as the fallback.

use ps_comfort::{HvacAction, MoldRiskLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextKey {
    NoPointsConfigured,
    NoValidEntity,
    NoDataAvailable,
    Temperature,
    Humidity,
    DewPoint,
    WetBulbTemp,
    Enthalpy,
    WaterContent,
    AbsoluteHumidity,
    SpecificVolume,
    PmvIndex,
    MoldRisk,
    Action,
    TotalPower,
    Heating,
    Cooling,
    Humidification,
    Dehumidification,
    IdealSetpoint,
    OptimalComfort,
    OutOfComfort,
    ComfortZone,
    Legend,
    Minimum,
    Average,
    Maximum,
    ClickToViewHistory,
    HistoryPeriod,
    DataPoints,
    MoldRiskNone,
    MoldRiskVeryLow,
    MoldRiskLow,
    MoldRiskModerate,
    MoldRiskHigh,
    MoldRiskVeryHigh,
    MoldRiskCritical,
    ActionHeat,
    ActionCool,
    ActionHumidify,
    ActionDehumidify,
    ActionJoin,
}

impl From<MoldRiskLevel> for TextKey {
    fn from(level: MoldRiskLevel) -> Self {
        match level {
            MoldRiskLevel::None => TextKey::MoldRiskNone,
            MoldRiskLevel::VeryLow => TextKey::MoldRiskVeryLow,
            MoldRiskLevel::Low => TextKey::MoldRiskLow,
            MoldRiskLevel::Moderate => TextKey::MoldRiskModerate,
            MoldRiskLevel::High => TextKey::MoldRiskHigh,
            MoldRiskLevel::VeryHigh => TextKey::MoldRiskVeryHigh,
            MoldRiskLevel::Critical => TextKey::MoldRiskCritical,
        }
    }
}

impl From<HvacAction> for TextKey {
    fn from(action: HvacAction) -> Self {
        match action {
            HvacAction::Heat => TextKey::ActionHeat,
            HvacAction::Cool => TextKey::ActionCool,
            HvacAction::Humidify => TextKey::ActionHumidify,
            HvacAction::Dehumidify => TextKey::ActionDehumidify,
        }
    }
}

/// Text lookup.
pub trait Translator {
    fn text(&self, key: TextKey) -> &str;

    /// Actions joined with the localized conjunction, e.g. "Heat and Dehumidify".
    fn describe_actions(&self, actions: &[HvacAction]) -> String {
        let sep = format!(" {} ", self.text(TextKey::ActionJoin));
        actions
            .iter()
            .map(|a| self.text((*a).into()))
            .collect::<Vec<_>>()
            .join(&sep)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    /// Unknown codes fall back to French.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Fr,
        }
    }
}

/// Built-in French/English table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuiltinTranslator {
    pub language: Language,
}

impl BuiltinTranslator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl Translator for BuiltinTranslator {
    fn text(&self, key: TextKey) -> &str {
        match self.language {
            Language::Fr => french(key),
            Language::En => english(key),
        }
    }
}

fn french(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        NoPointsConfigured => "Aucun point ou entité configuré dans la carte !",
        NoValidEntity => "Aucune entité valide trouvée !",
        NoDataAvailable => "Aucune donnée disponible",
        Temperature => "Température",
        Humidity => "Humidité",
        DewPoint => "Point de rosée",
        WetBulbTemp => "Temp. humide",
        Enthalpy => "Enthalpie",
        WaterContent => "Teneur eau",
        AbsoluteHumidity => "Humidité abs.",
        SpecificVolume => "Vol. spécifique",
        PmvIndex => "Indice PMV",
        MoldRisk => "Moisissure",
        Action => "Action",
        TotalPower => "Puissance totale",
        Heating => "Chauffage",
        Cooling => "Refroidissement",
        Humidification => "Humidification",
        Dehumidification => "Déshumidification",
        IdealSetpoint => "Consigne idéale",
        OptimalComfort => "Confort optimal",
        OutOfComfort => "Hors confort",
        ComfortZone => "Zone de confort",
        Legend => "Légende",
        Minimum => "Minimum",
        Average => "Moyenne",
        Maximum => "Maximum",
        ClickToViewHistory => "Cliquer pour voir l'historique",
        HistoryPeriod => "Historique des dernières 24 heures",
        DataPoints => "points de données",
        MoldRiskNone => "Aucun risque",
        MoldRiskVeryLow => "Très faible",
        MoldRiskLow => "Faible",
        MoldRiskModerate => "Modéré",
        MoldRiskHigh => "Élevé",
        MoldRiskVeryHigh => "Très élevé",
        MoldRiskCritical => "Critique",
        ActionHeat => "Réchauffer",
        ActionCool => "Refroidir",
        ActionHumidify => "Humidifier",
        ActionDehumidify => "Déshumidifier",
        ActionJoin => "et",
    }
}

fn english(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        NoPointsConfigured => "No points or entities configured in the card!",
        NoValidEntity => "No valid entities found!",
        NoDataAvailable => "No data available",
        Temperature => "Temperature",
        Humidity => "Humidity",
        DewPoint => "Dew point",
        WetBulbTemp => "Wet bulb temp.",
        Enthalpy => "Enthalpy",
        WaterContent => "Water content",
        AbsoluteHumidity => "Absolute humidity",
        SpecificVolume => "Specific volume",
        PmvIndex => "PMV Index",
        MoldRisk => "Mold risk",
        Action => "Action",
        TotalPower => "Total power",
        Heating => "Heating",
        Cooling => "Cooling",
        Humidification => "Humidification",
        Dehumidification => "Dehumidification",
        IdealSetpoint => "Ideal setpoint",
        OptimalComfort => "Optimal comfort",
        OutOfComfort => "Out of comfort",
        ComfortZone => "Comfort zone",
        Legend => "Legend",
        Minimum => "Minimum",
        Average => "Average",
        Maximum => "Maximum",
        ClickToViewHistory => "Click to view history",
        HistoryPeriod => "Last 24 hours history",
        DataPoints => "data points",
        MoldRiskNone => "No risk",
        MoldRiskVeryLow => "Very low",
        MoldRiskLow => "Low",
        MoldRiskModerate => "Moderate",
        MoldRiskHigh => "High",
        MoldRiskVeryHigh => "Very high",
        MoldRiskCritical => "Critical",
        ActionHeat => "Heat",
        ActionCool => "Cool",
        ActionHumidify => "Humidify",
        ActionDehumidify => "Dehumidify",
        ActionJoin => "and",
    }
}
