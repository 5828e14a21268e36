//! Clinical attribute sampling
//!
//! [`ClinicalAssignment`] draws the per-patient clinical and demographic
//! attributes. It holds no state; every draw comes from the caller's
//! [`RandomSource`].

use crate::records::Comorbidities;
use crate::simulation::{RandomSource, SimulationError, SimulationResult};
use crate::types::{ChiefComplaint, Comorbidity, Disposition, Gender, TriageLevel};

/// Triage distribution for chest pain
const CHEST_PAIN_TRIAGE: [(u8, f64); 2] = [(1, 0.3), (2, 0.7)];

/// Triage distribution for complaints without a dedicated rule
const DEFAULT_TRIAGE: [(u8, f64); 3] = [(3, 0.4), (4, 0.4), (5, 0.2)];

/// Probability that a patient has no comorbidities
pub const NO_COMORBIDITY_PROBABILITY: f64 = 0.3;

/// Probability that a patient is recorded as female
pub const FEMALE_PROBABILITY: f64 = 0.52;

/// Probability that an admissible (level 1-2) patient is admitted
pub const ADMISSION_PROBABILITY: f64 = 0.1;

/// Inclusive age range in years
pub const AGE_RANGE: (i64, i64) = (1, 90);

/// Complaint and the triage level it was conditioned on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    /// Presenting complaint
    pub chief_complaint: ChiefComplaint,
    /// Acuity drawn for the complaint
    pub triage_level: TriageLevel,
}

/// Demographic attributes of a patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    /// Age in years
    pub age: u8,
    /// Recorded gender
    pub gender: Gender,
    /// Chronic conditions
    pub comorbidities: Comorbidities,
}

/// Stateless sampler for clinical attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct ClinicalAssignment;

impl ClinicalAssignment {
    /// Create a sampler
    pub fn new() -> Self {
        Self
    }

    /// Draw a complaint and its conditioned triage level
    pub fn assess(&self, rng: &mut RandomSource) -> SimulationResult<Assessment> {
        let chief_complaint = self.chief_complaint(rng)?;
        let triage_level = self.triage_level(chief_complaint, rng)?;
        Ok(Assessment { chief_complaint, triage_level })
    }

    /// Complaint drawn uniformly from the vocabulary
    pub fn chief_complaint(&self, rng: &mut RandomSource) -> SimulationResult<ChiefComplaint> {
        rng.choose(&ChiefComplaint::ALL).copied()
    }

    /// Triage level conditioned on the complaint
    pub fn triage_level(
        &self,
        complaint: ChiefComplaint,
        rng: &mut RandomSource,
    ) -> SimulationResult<TriageLevel> {
        let level = match complaint {
            ChiefComplaint::SevereTrauma => 1,
            ChiefComplaint::ChestPain => rng.weighted(&CHEST_PAIN_TRIAGE)?,
            _ => rng.weighted(&DEFAULT_TRIAGE)?,
        };
        TriageLevel::new(level).ok_or_else(|| {
            SimulationError::invalid_argument(format!("Derived triage level {} is outside 1..=5", level))
        })
    }

    /// Age, gender and comorbidities
    pub fn demographics(&self, rng: &mut RandomSource) -> SimulationResult<Demographics> {
        let age = rng.uniform_inclusive(AGE_RANGE.0, AGE_RANGE.1) as u8;
        let gender = if rng.chance(FEMALE_PROBABILITY) { Gender::Female } else { Gender::Male };
        let comorbidities = self.comorbidities(rng)?;
        Ok(Demographics { age, gender, comorbidities })
    }

    /// `None` with probability 0.3, else one or two distinct conditions
    pub fn comorbidities(&self, rng: &mut RandomSource) -> SimulationResult<Comorbidities> {
        if rng.chance(NO_COMORBIDITY_PROBABILITY) {
            return Ok(Comorbidities::none());
        }
        let amount = rng.uniform_inclusive(1, 2) as usize;
        let conditions = rng.sample_distinct(&Comorbidity::ALL, amount)?;
        Ok(Comorbidities::from_conditions(conditions))
    }

    /// Disposition for a patient at `level`
    ///
    /// Only levels 1 and 2 consume a draw; everyone else is discharged.
    pub fn disposition(&self, level: TriageLevel, rng: &mut RandomSource) -> Disposition {
        if level.is_admissible() && rng.chance(ADMISSION_PROBABILITY) {
            Disposition::Admitted
        } else {
            Disposition::Discharged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_severe_trauma_is_always_level_one() {
        let mut rng = RandomSource::from_seed(42);
        let clinical = ClinicalAssignment::new();
        for _ in 0..200 {
            let level = clinical.triage_level(ChiefComplaint::SevereTrauma, &mut rng).unwrap();
            assert_eq!(level, TriageLevel::MOST_SEVERE);
        }
    }

    #[test]
    fn test_chest_pain_is_level_one_or_two() {
        let mut rng = RandomSource::from_seed(42);
        let clinical = ClinicalAssignment::new();
        let levels: HashSet<u8> = (0..500)
            .map(|_| clinical.triage_level(ChiefComplaint::ChestPain, &mut rng).unwrap().value())
            .collect();
        assert_eq!(levels, HashSet::from([1, 2]));
    }

    #[test]
    fn test_other_complaints_are_level_three_to_five() {
        let mut rng = RandomSource::from_seed(42);
        let clinical = ClinicalAssignment::new();
        for complaint in [ChiefComplaint::Headache, ChiefComplaint::Fracture, ChiefComplaint::GeneralWeakness] {
            for _ in 0..200 {
                let level = clinical.triage_level(complaint, &mut rng).unwrap().value();
                assert!((3..=5).contains(&level), "{} got level {}", complaint, level);
            }
        }
    }

    #[test]
    fn test_comorbidities_are_distinct_and_bounded() {
        let mut rng = RandomSource::from_seed(11);
        let clinical = ClinicalAssignment::new();
        let mut saw_none = false;
        for _ in 0..500 {
            let comorbidities = clinical.comorbidities(&mut rng).unwrap();
            let conditions = comorbidities.conditions();
            if comorbidities.is_none() {
                saw_none = true;
                continue;
            }
            assert!(conditions.len() == 1 || conditions.len() == 2);
            let unique: HashSet<_> = conditions.iter().collect();
            assert_eq!(unique.len(), conditions.len());
        }
        assert!(saw_none);
    }

    #[test]
    fn test_demographics_ranges() {
        let mut rng = RandomSource::from_seed(3);
        let clinical = ClinicalAssignment::new();
        let mut genders = HashSet::new();
        for _ in 0..500 {
            let demographics = clinical.demographics(&mut rng).unwrap();
            assert!((1..=90).contains(&demographics.age));
            genders.insert(demographics.gender);
        }
        assert_eq!(genders.len(), 2);
    }

    #[test]
    fn test_low_acuity_is_never_admitted() {
        let mut rng = RandomSource::from_seed(5);
        let clinical = ClinicalAssignment::new();
        for level in 3..=5 {
            let level = TriageLevel::new(level).unwrap();
            for _ in 0..200 {
                assert_eq!(clinical.disposition(level, &mut rng), Disposition::Discharged);
            }
        }
    }

    #[test]
    fn test_high_acuity_is_sometimes_admitted() {
        let mut rng = RandomSource::from_seed(5);
        let clinical = ClinicalAssignment::new();
        let admitted = (0..2000)
            .filter(|_| clinical.disposition(TriageLevel::MOST_SEVERE, &mut rng) == Disposition::Admitted)
            .count();
        // Expected around 200 of 2000
        assert!(admitted > 100 && admitted < 300, "admitted {}", admitted);
    }

    fn within(count: usize, expected: usize, tolerance: usize) -> bool {
        count + tolerance >= expected && count <= expected + tolerance
    }

    #[test]
    fn test_chest_pain_triage_frequencies() {
        let mut rng = RandomSource::from_seed(17);
        let clinical = ClinicalAssignment::new();
        let level_one = (0..4000)
            .filter(|_| clinical.triage_level(ChiefComplaint::ChestPain, &mut rng).unwrap().value() == 1)
            .count();
        // 30% level 1, 70% level 2
        assert!(within(level_one, 1200, 150), "level 1: {}", level_one);
    }

    #[test]
    fn test_default_triage_frequencies() {
        let mut rng = RandomSource::from_seed(23);
        let clinical = ClinicalAssignment::new();
        let mut counts = [0usize; 6];
        for _ in 0..4000 {
            let level = clinical.triage_level(ChiefComplaint::AbdominalPain, &mut rng).unwrap();
            counts[level.value() as usize] += 1;
        }
        assert!(within(counts[3], 1600, 150), "level 3: {}", counts[3]);
        assert!(within(counts[4], 1600, 150), "level 4: {}", counts[4]);
        assert!(within(counts[5], 800, 150), "level 5: {}", counts[5]);
    }

    #[test]
    fn test_female_frequency() {
        let mut rng = RandomSource::from_seed(31);
        let clinical = ClinicalAssignment::new();
        let female = (0..10_000)
            .filter(|_| clinical.demographics(&mut rng).unwrap().gender == Gender::Female)
            .count();
        assert!(within(female, 5200, 150), "female: {}", female);
    }

    #[test]
    fn test_comorbidity_count_frequencies() {
        let mut rng = RandomSource::from_seed(37);
        let clinical = ClinicalAssignment::new();
        let mut by_count = [0usize; 3];
        for _ in 0..4000 {
            by_count[clinical.comorbidities(&mut rng).unwrap().conditions().len()] += 1;
        }
        // 30% none, the rest split evenly between one and two conditions
        assert!(within(by_count[0], 1200, 150), "none: {}", by_count[0]);
        assert!(within(by_count[1], 1400, 150), "one: {}", by_count[1]);
        assert!(within(by_count[2], 1400, 150), "two: {}", by_count[2]);
    }
}
