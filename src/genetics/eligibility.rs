//! Breeding eligibility rule chain. First failing rule wins.

use super::types::BreedingRules;
use crate::pet::Pet;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Why a pair may not breed. `Display` gives the player-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DenialReason {
    SamePet,
    TooYoung { min_age_days: i64 },
    LowHealth { min_health: u8 },
    Critical,
    Cooldown { pet_name: String, days_remaining: i64 },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::SamePet => write!(f, "Cannot breed a pet with itself"),
            DenialReason::TooYoung { min_age_days } => {
                write!(f, "Both pets must be at least {min_age_days} days old")
            }
            DenialReason::LowHealth { min_health } => {
                write!(f, "Both pets must have health above {min_health}")
            }
            DenialReason::Critical => write!(f, "Cannot breed pets in critical condition"),
            DenialReason::Cooldown {
                pet_name,
                days_remaining,
            } => write!(
                f,
                "{pet_name} must wait {days_remaining} day(s) before breeding again"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Eligibility {
    Allowed,
    Denied(DenialReason),
}

impl Eligibility {
    pub fn can_breed(&self) -> bool {
        matches!(self, Eligibility::Allowed)
    }

    pub fn reason(&self) -> Option<String> {
        match self {
            Eligibility::Allowed => None,
            Eligibility::Denied(reason) => Some(reason.to_string()),
        }
    }

    pub fn denial(&self) -> Option<&DenialReason> {
        match self {
            Eligibility::Allowed => None,
            Eligibility::Denied(reason) => Some(reason),
        }
    }
}

/// Whole days left on a pet's breeding cooldown, rounded up. Zero when free.
///
/// Works in saturating seconds, so an unvalidated cooldown too long for a
/// `chrono::Duration` simply never runs out.
pub fn cooldown_days_remaining(pet: &Pet, now: DateTime<Utc>, rules: &BreedingRules) -> i64 {
    let Some(last_bred) = pet.last_bred_at else {
        return 0;
    };
    let elapsed = now.signed_duration_since(last_bred).num_seconds();
    let remaining = rules
        .cooldown_days
        .saturating_mul(SECONDS_PER_DAY)
        .saturating_sub(elapsed);
    if remaining <= 0 {
        0
    } else {
        remaining / SECONDS_PER_DAY + i64::from(remaining % SECONDS_PER_DAY != 0)
    }
}

fn is_old_enough(pet: &Pet, now: DateTime<Utc>, rules: &BreedingRules) -> bool {
    let age_millis = now.signed_duration_since(pet.created_at).num_milliseconds();
    age_millis >= rules.min_age_days.saturating_mul(SECONDS_PER_DAY * 1000)
}

/// Checks whether two pets may breed right now.
pub fn check_eligibility(
    pet1: &Pet,
    pet2: &Pet,
    now: DateTime<Utc>,
    rules: &BreedingRules,
) -> Eligibility {
    if pet1.id == pet2.id {
        return Eligibility::Denied(DenialReason::SamePet);
    }

    if !is_old_enough(pet1, now, rules) || !is_old_enough(pet2, now, rules) {
        return Eligibility::Denied(DenialReason::TooYoung {
            min_age_days: rules.min_age_days,
        });
    }

    if pet1.stats.health.value() <= rules.min_health || pet2.stats.health.value() <= rules.min_health {
        return Eligibility::Denied(DenialReason::LowHealth {
            min_health: rules.min_health,
        });
    }

    if pet1.is_critical || pet2.is_critical {
        return Eligibility::Denied(DenialReason::Critical);
    }

    for pet in [pet1, pet2] {
        let days_remaining = cooldown_days_remaining(pet, now, rules);
        if days_remaining > 0 {
            return Eligibility::Denied(DenialReason::Cooldown {
                pet_name: pet.name.clone(),
                days_remaining,
            });
        }
    }

    Eligibility::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_BREEDING_RULE_DAYS;
    use crate::pet::{OwnerId, Vital};
    use chrono::Duration;

    fn adult(name: &str, now: DateTime<Utc>) -> Pet {
        Pet::new(OwnerId::new(), name, now - Duration::days(10))
    }

    fn check(p1: &Pet, p2: &Pet, now: DateTime<Utc>) -> Eligibility {
        check_eligibility(p1, p2, now, &BreedingRules::default())
    }

    #[test]
    fn test_two_healthy_adults_may_breed() {
        let now = Utc::now();
        let result = check(&adult("A", now), &adult("B", now), now);
        assert!(result.can_breed());
        assert_eq!(result.reason(), None);
    }

    #[test]
    fn test_same_pet_denied() {
        let now = Utc::now();
        let pet = adult("A", now);
        let result = check(&pet, &pet.clone(), now);
        assert_eq!(result.reason().as_deref(), Some("Cannot breed a pet with itself"));
    }

    #[test]
    fn test_newborns_denied() {
        let now = Utc::now();
        let a = Pet::new(OwnerId::new(), "A", now);
        let b = Pet::new(OwnerId::new(), "B", now);
        let result = check(&a, &b, now);
        assert!(!result.can_breed());
        assert_eq!(
            result.reason().as_deref(),
            Some("Both pets must be at least 7 days old")
        );
    }

    #[test]
    fn test_exactly_seven_days_is_old_enough() {
        let now = Utc::now();
        let a = Pet::new(OwnerId::new(), "A", now - Duration::days(7));
        let b = adult("B", now);
        assert!(check(&a, &b, now).can_breed());
    }

    #[test]
    fn test_health_must_be_strictly_above_fifty() {
        let now = Utc::now();
        let mut a = adult("A", now);
        let b = adult("B", now);
        a.stats.health = Vital::new(50.0).unwrap();
        assert_eq!(
            check(&a, &b, now).reason().as_deref(),
            Some("Both pets must have health above 50")
        );
        a.stats.health = Vital::new(51.0).unwrap();
        assert!(check(&a, &b, now).can_breed());
    }

    #[test]
    fn test_health_threshold_reads_whole_points() {
        let now = Utc::now();
        let b = adult("B", now);
        let mut a = adult("A", now);
        // 50.4 shows as 50, 50.6 as 51
        a.stats.health = Vital::new(50.4).unwrap();
        assert!(!check(&a, &b, now).can_breed());
        a.stats.health = Vital::new(50.6).unwrap();
        assert!(check(&a, &b, now).can_breed());
    }

    #[test]
    fn test_century_rules_evaluate() {
        let now = Utc::now();
        let rules = BreedingRules {
            min_age_days: MAX_BREEDING_RULE_DAYS,
            cooldown_days: MAX_BREEDING_RULE_DAYS,
            ..Default::default()
        };
        assert!(rules.validate().is_ok());
        let mut a = adult("A", now);
        a.last_bred_at = Some(now);
        assert_eq!(cooldown_days_remaining(&a, now, &rules), MAX_BREEDING_RULE_DAYS);
        assert_eq!(
            check_eligibility(&a, &adult("B", now), now, &rules).denial(),
            Some(&DenialReason::TooYoung {
                min_age_days: MAX_BREEDING_RULE_DAYS
            })
        );
    }

    #[test]
    fn test_unrepresentable_rules_deny_instead_of_overflowing() {
        let now = Utc::now();
        let mut a = adult("A", now);
        a.last_bred_at = Some(now - Duration::days(365));
        let b = adult("B", now);

        let endless_cooldown = BreedingRules {
            cooldown_days: i64::MAX,
            ..Default::default()
        };
        let days = cooldown_days_remaining(&a, now, &endless_cooldown);
        assert!(days > 1_000_000_000_000, "{days}");
        assert!(matches!(
            check_eligibility(&a, &b, now, &endless_cooldown).denial(),
            Some(DenialReason::Cooldown { .. })
        ));

        let ancient = BreedingRules {
            min_age_days: i64::MAX,
            ..Default::default()
        };
        assert!(matches!(
            check_eligibility(&a, &b, now, &ancient).denial(),
            Some(DenialReason::TooYoung { .. })
        ));
    }

    #[test]
    fn test_critical_denied() {
        let now = Utc::now();
        let a = adult("A", now);
        let mut b = adult("B", now);
        b.is_critical = true;
        assert_eq!(
            check(&a, &b, now).reason().as_deref(),
            Some("Cannot breed pets in critical condition")
        );
    }

    #[test]
    fn test_cooldown_rounds_up_days() {
        let now = Utc::now();
        let mut a = adult("Biscuit", now);
        let b = adult("B", now);
        a.last_bred_at = Some(now - Duration::days(4) - Duration::hours(6));
        let result = check(&a, &b, now);
        assert_eq!(
            result.reason().as_deref(),
            Some("Biscuit must wait 3 day(s) before breeding again")
        );
    }

    #[test]
    fn test_cooldown_checks_second_parent() {
        let now = Utc::now();
        let a = adult("A", now);
        let mut b = adult("Noodle", now);
        b.last_bred_at = Some(now - Duration::hours(1));
        assert_eq!(
            check(&a, &b, now).denial(),
            Some(&DenialReason::Cooldown {
                pet_name: "Noodle".to_string(),
                days_remaining: 7,
            })
        );
    }

    #[test]
    fn test_cooldown_expired() {
        let now = Utc::now();
        let mut a = adult("A", now);
        a.last_bred_at = Some(now - Duration::days(7));
        assert_eq!(cooldown_days_remaining(&a, now, &BreedingRules::default()), 0);
        assert!(check(&a, &adult("B", now), now).can_breed());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let now = Utc::now();
        // Young, sick, critical and on cooldown: age is reported
        let mut a = Pet::new(OwnerId::new(), "A", now);
        a.stats.health = Vital::MIN;
        a.is_critical = true;
        a.last_bred_at = Some(now);
        let b = adult("B", now);
        assert_eq!(
            check(&a, &b, now).denial(),
            Some(&DenialReason::TooYoung { min_age_days: 7 })
        );
    }

    #[test]
    fn test_custom_rules_change_thresholds() {
        let now = Utc::now();
        let rules = BreedingRules {
            min_age_days: 1,
            min_health: 20,
            ..Default::default()
        };
        let mut a = Pet::new(OwnerId::new(), "A", now - Duration::days(2));
        a.stats.health = Vital::new(30.0).unwrap();
        let b = Pet::new(OwnerId::new(), "B", now - Duration::days(2));
        assert!(check_eligibility(&a, &b, now, &rules).can_breed());
    }
}
