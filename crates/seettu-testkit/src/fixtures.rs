//! Roster and history fixtures
//!
//! The sample family pool the product ships with: ten members, seven paid,
//! three past winners at ₹10,000 a round.

use seettu_core::{CurrentUser, DrawRecord, Member, MemberId, RecordId};
use time::macros::date;

/// The ten-member sample family roster.
pub fn family_roster() -> Vec<Member> {
    vec![
        Member::paid(MemberId::new(1), "Appa", "+91 98765 43210"),
        Member::paid(MemberId::new(2), "Amma", "+91 98765 43211"),
        Member::paid(MemberId::new(3), "Anna", "+91 98765 43212"),
        Member::new(MemberId::new(4), "Akka", "+91 98765 43213"),
        Member::paid(MemberId::new(5), "Thambi", "+91 98765 43214"),
        Member::paid(MemberId::new(6), "Thangai", "+91 98765 43215"),
        Member::new(MemberId::new(7), "Mama", "+91 98765 43216"),
        Member::paid(MemberId::new(8), "Mami", "+91 98765 43217"),
        Member::paid(MemberId::new(9), "Chithappa", "+91 98765 43218"),
        Member::new(MemberId::new(10), "Chithi", "+91 98765 43219"),
    ]
}

/// Three completed rounds won by Anna, Amma, and Thambi.
pub fn past_winners() -> Vec<DrawRecord> {
    vec![
        DrawRecord {
            id: RecordId::new(1),
            winner_id: MemberId::new(3),
            winner_name: "Anna".to_string(),
            amount: 10_000,
            date: date!(2024 - 01 - 15),
            round: 1,
        },
        DrawRecord {
            id: RecordId::new(2),
            winner_id: MemberId::new(2),
            winner_name: "Amma".to_string(),
            amount: 10_000,
            date: date!(2024 - 02 - 15),
            round: 2,
        },
        DrawRecord {
            id: RecordId::new(3),
            winner_id: MemberId::new(5),
            winner_name: "Thambi".to_string(),
            amount: 10_000,
            date: date!(2024 - 03 - 15),
            round: 3,
        },
    ]
}

/// The hardcoded admin user the sample pool signs in as.
pub fn pool_admin() -> CurrentUser {
    CurrentUser {
        id: MemberId::new(1),
        name: "Appa".to_string(),
        is_admin: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_matches_the_sample_pool() {
        let roster = family_roster();
        assert_eq!(roster.len(), 10);
        assert_eq!(roster.iter().filter(|m| m.paid).count(), 7);
    }

    #[test]
    fn past_winner_rounds_are_sequential() {
        let rounds: Vec<u32> = past_winners().iter().map(|r| r.round).collect();
        assert_eq!(rounds, vec![1, 2, 3]);
    }
}
