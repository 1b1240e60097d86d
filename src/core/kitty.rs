use super::types::{KittyRound, KittySettlement, amount};

/// Settles one round of a kitty (chit fund) group.
///
/// The winning bid is the discount the winner accepts on the pot; it is
/// shared equally among members as a dividend. Returns `None` for a group
/// with no members.
pub fn settle_kitty_round(round: &KittyRound) -> Option<KittySettlement> {
    if round.members.is_empty() {
        return None;
    }

    let member_count = round.members.len() as u32;
    let paid_count = round.members.iter().filter(|m| m.has_paid).count() as u32;
    let members = f64::from(member_count);

    let contribution = amount(round.contribution_per_member);
    let pot_value = contribution * members;
    let bid = round.winning_bid.map(amount).unwrap_or(0.0).min(pot_value);
    let dividend_per_member = if bid > 0.0 {
        (bid / members).round()
    } else {
        0.0
    };

    Some(KittySettlement {
        member_count,
        paid_count,
        pot_value,
        collected_amount: contribution * f64::from(paid_count),
        collection_progress: f64::from(paid_count) / members,
        dividend_per_member,
        winner_payout: pot_value - bid,
    })
}
