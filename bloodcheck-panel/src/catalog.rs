//! Fixed reference catalog: the four panel profiles with their analytes
//! and per-sex reference intervals.

use bloodcheck_core::{
    AnalyteDefinition, PanelError, Profile, ProfileId, ReferenceBySex, ReferenceInterval,
    SexCategory,
};

/// The fixed, read-only set of panel profiles known at startup.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    profiles: Vec<Profile>,
}

impl ReferenceCatalog {
    /// Build the standard catalog. Profile order is the display order and
    /// matches `ProfileId::index`.
    pub fn standard() -> Self {
        Self {
            profiles: vec![
                profile(
                    ProfileId::Basic,
                    "Small blood count",
                    vec![
                        analyte(
                            "wbc",
                            "Leukocytes (WBC)",
                            "G/L",
                            "Immune defense against infections.",
                            (4.0, 10.0),
                            (4.0, 10.0),
                        ),
                        analyte(
                            "rbc",
                            "Erythrocytes (RBC)",
                            "T/L",
                            "Transports oxygen and carbon dioxide.",
                            (4.5, 6.0),
                            (4.0, 5.4),
                        ),
                        analyte(
                            "hb",
                            "Hemoglobin (HB)",
                            "g/dL",
                            "Binds and transports oxygen.",
                            (14.0, 18.0),
                            (12.0, 16.0),
                        ),
                        analyte(
                            "hkt",
                            "Hematocrit (HCT)",
                            "%",
                            "Share of cellular components in the blood volume.",
                            (40.0, 54.0),
                            (36.0, 48.0),
                        ),
                        analyte(
                            "plt",
                            "Platelets (PLT)",
                            "G/L",
                            "Responsible for clotting and wound closure.",
                            (150.0, 400.0),
                            (150.0, 400.0),
                        ),
                    ],
                ),
                profile(
                    ProfileId::Extended,
                    "Complete blood count",
                    vec![
                        analyte(
                            "wbc",
                            "Leukocytes (WBC)",
                            "G/L",
                            "Immune defense against infections.",
                            (4.0, 10.0),
                            (4.0, 10.0),
                        ),
                        analyte(
                            "neut",
                            "Neutrophils",
                            "%",
                            "First line of defense against bacteria.",
                            (40.0, 75.0),
                            (40.0, 75.0),
                        ),
                        analyte(
                            "lymph",
                            "Lymphocytes",
                            "%",
                            "Adaptive immune response.",
                            (20.0, 45.0),
                            (20.0, 45.0),
                        ),
                        analyte(
                            "hb",
                            "Hemoglobin (HB)",
                            "g/dL",
                            "Binds and transports oxygen.",
                            (14.0, 18.0),
                            (12.0, 16.0),
                        ),
                        analyte(
                            "ferritin",
                            "Ferritin",
                            "ng/mL",
                            "Iron stores and an early marker of deficiency.",
                            (30.0, 400.0),
                            (15.0, 150.0),
                        ),
                        analyte(
                            "crp",
                            "CRP",
                            "mg/L",
                            "Marker of acute inflammation.",
                            (0.0, 5.0),
                            (0.0, 5.0),
                        ),
                    ],
                ),
                profile(
                    ProfileId::Hormone,
                    "Hormone profile",
                    vec![
                        analyte(
                            "tsh",
                            "TSH",
                            "mIU/L",
                            "Controls thyroid function.",
                            (0.4, 4.0),
                            (0.4, 4.0),
                        ),
                        analyte(
                            "fT4",
                            "Free T4",
                            "ng/dL",
                            "Active thyroid hormone.",
                            (0.8, 1.8),
                            (0.8, 1.8),
                        ),
                        analyte(
                            "testo",
                            "Testosterone",
                            "ng/mL",
                            "Affects energy, muscle and libido.",
                            (2.5, 8.5),
                            (0.1, 0.9),
                        ),
                        analyte(
                            "estradiol",
                            "Estradiol",
                            "pg/mL",
                            "Regulates cycle, bone metabolism and mood.",
                            (10.0, 60.0),
                            (30.0, 350.0),
                        ),
                        analyte(
                            "vitD",
                            "Vitamin D (25-OH)",
                            "ng/mL",
                            "Bone metabolism and immune balance.",
                            (30.0, 60.0),
                            (30.0, 60.0),
                        ),
                    ],
                ),
                profile(
                    ProfileId::Vital,
                    "Vital profile",
                    vec![
                        analyte(
                            "glucose",
                            "Fasting glucose",
                            "mg/dL",
                            "Energy supply and metabolism.",
                            (70.0, 100.0),
                            (70.0, 100.0),
                        ),
                        analyte(
                            "hba1c",
                            "HbA1c",
                            "%",
                            "Average blood sugar over the past 8 to 12 weeks.",
                            (4.0, 5.6),
                            (4.0, 5.6),
                        ),
                        analyte(
                            "chol",
                            "Total cholesterol",
                            "mg/dL",
                            "Lipid metabolism and cardiovascular risk.",
                            (120.0, 200.0),
                            (120.0, 200.0),
                        ),
                        analyte(
                            "hdl",
                            "HDL",
                            "mg/dL",
                            "Protective cholesterol, transported for breakdown.",
                            (40.0, 80.0),
                            (50.0, 90.0),
                        ),
                        analyte(
                            "ldl",
                            "LDL",
                            "mg/dL",
                            "Cholesterol that forms deposits in vessel walls.",
                            (0.0, 130.0),
                            (0.0, 120.0),
                        ),
                    ],
                ),
            ],
        }
    }

    /// All profiles in display order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Look up a profile by typed id. Total: the catalog always carries the
    /// whole fixed set.
    pub fn profile(&self, id: ProfileId) -> &Profile {
        &self.profiles[id.index()]
    }

    /// Look up a profile by string key, failing for keys outside the fixed set.
    pub fn profile_by_key(&self, key: &str) -> Result<&Profile, PanelError> {
        let id = ProfileId::from_key(key)?;
        Ok(self.profile(id))
    }

    /// Look up one analyte definition within a profile.
    pub fn analyte(&self, profile: ProfileId, key: &str) -> Result<&AnalyteDefinition, PanelError> {
        self.profile(profile)
            .analyte(key)
            .ok_or_else(|| PanelError::UnknownAnalyte(key.to_string()))
    }

    /// Resolve the reference interval for one analyte under the given sex.
    pub fn reference_interval(
        &self,
        profile: ProfileId,
        key: &str,
        sex: SexCategory,
    ) -> Result<ReferenceInterval, PanelError> {
        Ok(self.analyte(profile, key)?.reference.interval_for(sex))
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn profile(id: ProfileId, label: &str, analytes: Vec<AnalyteDefinition>) -> Profile {
    Profile {
        id,
        label: label.to_string(),
        analytes,
    }
}

fn analyte(
    key: &str,
    name: &str,
    unit: &str,
    description: &str,
    male: (f64, f64),
    female: (f64, f64),
) -> AnalyteDefinition {
    AnalyteDefinition {
        key: key.to_string(),
        name: name.to_string(),
        unit: unit.to_string(),
        description: description.to_string(),
        reference: ReferenceBySex {
            male: interval(male),
            female: interval(female),
        },
    }
}

fn interval((min, max): (f64, f64)) -> ReferenceInterval {
    ReferenceInterval { min, max }
}
