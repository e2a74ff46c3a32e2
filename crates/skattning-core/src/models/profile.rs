use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Patient age band. Recommendation banks and narrative templates are
/// duplicated per age group because clinical phrasing differs materially
/// between children and adolescents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeGroup {
    Child,
    Teen,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 2] = [AgeGroup::Child, AgeGroup::Teen];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Teen => "teen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    Nonbinary,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Nonbinary];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Nonbinary => "nonbinary",
        }
    }
}

/// Neurodevelopmental diagnoses with pre-written guidance text.
/// `None` is the "no diagnosis" sentinel — it selects no narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Diagnosis {
    None,
    Adhd,
    Autism,
    Both,
    IntellectualDisability,
}

impl Diagnosis {
    pub fn as_str(self) -> &'static str {
        match self {
            Diagnosis::None => "none",
            Diagnosis::Adhd => "adhd",
            Diagnosis::Autism => "autism",
            Diagnosis::Both => "both",
            Diagnosis::IntellectualDisability => "intellectual_disability",
        }
    }
}

/// The (age group × sex) pair that keys a recommendation bank variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Profile {
    pub age_group: AgeGroup,
    pub sex: Sex,
}

impl Profile {
    pub fn new(age_group: AgeGroup, sex: Sex) -> Self {
        Profile { age_group, sex }
    }

    /// Bank key, e.g. `child_male` or `teen_nonbinary`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.age_group.as_str(), self.sex.as_str())
    }

    /// All six profiles, in age-then-sex order.
    pub fn all() -> impl Iterator<Item = Profile> {
        AgeGroup::ALL
            .into_iter()
            .flat_map(|age| Sex::ALL.into_iter().map(move |sex| Profile::new(age, sex)))
    }
}
