//! Tests for the authorization guard and the settlement ledger

use chrono::Utc;
use core_kernel::{Amount, BillId, GroupId, UserId};
use domain_split::bill::{Bill, BillShare};
use domain_split::error::DomainError;
use domain_split::group::Group;
use domain_split::guard::{require_bill_visible, require_group_member};
use domain_split::ledger::{outstanding_balance, require_recipient_is_participant};
use domain_split::user::User;
use rust_decimal_macros::dec;

fn user(name: &str) -> User {
    User {
        id: UserId::new(),
        name: name.to_string(),
        email: format!("{name}@example.com"),
        password: "secret".to_string(),
    }
}

fn bill_with(payer: &User, participants: &[(&User, Amount)]) -> Bill {
    let bill_id = BillId::new();
    Bill {
        id: bill_id,
        description: "dinner".to_string(),
        total_amount: participants
            .iter()
            .map(|(_, amount)| *amount)
            .sum(),
        payer: payer.clone(),
        group_id: GroupId::new(),
        shares: participants
            .iter()
            .map(|(user, amount)| BillShare {
                bill_id,
                user: (*user).clone(),
                amount: *amount,
            })
            .collect(),
        created_at: Utc::now(),
    }
}

#[test]
fn test_group_member_passes_guard() {
    let alice = user("alice");
    let group = Group {
        id: GroupId::new(),
        name: "flatmates".to_string(),
        members: vec![alice.clone()],
    };

    assert!(require_group_member(&group, alice.id).is_ok());
}

#[test]
fn test_non_member_fails_guard() {
    let alice = user("alice");
    let mallory = user("mallory");
    let group = Group {
        id: GroupId::new(),
        name: "flatmates".to_string(),
        members: vec![alice],
    };

    let err = require_group_member(&group, mallory.id).unwrap_err();
    assert!(matches!(err, DomainError::Authorization(_)));
}

#[test]
fn test_bill_visible_to_payer_without_share() {
    let payer = user("payer");
    let alice = user("alice");
    let bill = bill_with(&payer, &[(&alice, Amount::new(dec!(10)))]);

    assert!(require_bill_visible(&bill, payer.id).is_ok());
}

#[test]
fn test_bill_visible_to_share_holder() {
    let payer = user("payer");
    let alice = user("alice");
    let bill = bill_with(&payer, &[(&alice, Amount::new(dec!(10)))]);

    assert!(require_bill_visible(&bill, alice.id).is_ok());
}

#[test]
fn test_bill_hidden_from_outsider() {
    let payer = user("payer");
    let alice = user("alice");
    let mallory = user("mallory");
    let bill = bill_with(&payer, &[(&alice, Amount::new(dec!(10)))]);

    let err = require_bill_visible(&bill, mallory.id).unwrap_err();
    assert!(matches!(err, DomainError::Authorization(_)));
}

#[test]
fn test_participants_are_derived_from_shares() {
    let payer = user("payer");
    let alice = user("alice");
    let bob = user("bob");
    let bill = bill_with(
        &payer,
        &[
            (&alice, Amount::new(dec!(10))),
            (&bob, Amount::new(dec!(15))),
        ],
    );

    let participants: Vec<UserId> = bill.participants().map(|user| user.id).collect();
    assert_eq!(participants, vec![alice.id, bob.id]);
    // The payer holds no share and is not a derived participant.
    assert!(!bill.has_share(payer.id));
}

#[test]
fn test_outstanding_balance_reaches_zero_when_paid_in_full() {
    let alice = user("alice");
    let share = BillShare {
        bill_id: BillId::new(),
        user: alice,
        amount: Amount::new(dec!(22.5)),
    };

    let balance = outstanding_balance(&share, Amount::new(dec!(22.5)));
    assert!(balance.is_zero());
}

#[test]
fn test_outstanding_balance_goes_negative_on_overpayment() {
    let alice = user("alice");
    let share = BillShare {
        bill_id: BillId::new(),
        user: alice,
        amount: Amount::new(dec!(20)),
    };

    let balance = outstanding_balance(&share, Amount::new(dec!(30)));
    assert!(balance.is_negative());
    assert_eq!(balance, Amount::new(dec!(-10)));
}

#[test]
fn test_recipient_must_hold_share_or_be_payer() {
    let payer = user("payer");
    let alice = user("alice");
    let mallory = user("mallory");
    let bill = bill_with(&payer, &[(&alice, Amount::new(dec!(10)))]);

    assert!(require_recipient_is_participant(&bill, payer.id).is_ok());
    assert!(require_recipient_is_participant(&bill, alice.id).is_ok());

    let err = require_recipient_is_participant(&bill, mallory.id).unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}
