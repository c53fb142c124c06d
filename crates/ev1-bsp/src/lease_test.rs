// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for lease bookkeeping.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::error::BspError;
use crate::lease::{LeaseLedger, MAX_LEASE, MAX_LEASED};
use rif_abi::{BootMode, CoreId, GpioBank, Pin, ResourceId};
use rif_arbiter::{Arbiter, ArbitrationError, AuthorityCall, MockAuthority};

const PH4: ResourceId = ResourceId::gpio(Pin::fixed(GpioBank::H, 4));
const PD8: ResourceId = ResourceId::gpio(Pin::fixed(GpioBank::D, 8));
const GATE_H: ResourceId = ResourceId::clock_gate(97);

fn production() -> Arbiter<MockAuthority> {
    Arbiter::new(BootMode::Production, MockAuthority::new())
}

#[test]
fn acquire_all_takes_every_resource() {
    let arbiter = production();
    let mut ledger = LeaseLedger::new(CoreId::Ca35);

    let lease = ledger.acquire_all(&arbiter, &[PH4, GATE_H]).unwrap();
    assert_eq!(lease.resources(), &[PH4, GATE_H]);
    assert_eq!(arbiter.owner(PH4), Some(CoreId::Ca35));
    assert_eq!(arbiter.owner(GATE_H), Some(CoreId::Ca35));
    assert_eq!(ledger.len(), 2);
}

#[test]
fn duplicates_are_leased_once() {
    let arbiter = production();
    let mut ledger = LeaseLedger::new(CoreId::Ca35);

    let lease = ledger.acquire_all(&arbiter, &[PH4, PH4, GATE_H]).unwrap();
    assert_eq!(lease.len(), 2);
    assert_eq!(ledger.users(PH4), 1);
}

#[test]
fn denial_rolls_back_in_reverse_order() {
    let arbiter = production();
    let mut cm33 = LeaseLedger::new(CoreId::Cm33);
    let _held = cm33.acquire_all(&arbiter, &[GATE_H]).unwrap();

    let mut ca35 = LeaseLedger::new(CoreId::Ca35);
    let err = ca35.acquire_all(&arbiter, &[PH4, GATE_H, PD8]).unwrap_err();

    assert_eq!(
        err,
        BspError::InitializationFailure {
            resource: GATE_H,
            source: ArbitrationError::Contention {
                resource: GATE_H,
                owner: CoreId::Cm33,
            },
        }
    );
    // First resource handed back, third never requested
    assert_eq!(arbiter.owner(PH4), None);
    assert_eq!(arbiter.owner(PD8), None);
    assert_eq!(arbiter.owner(GATE_H), Some(CoreId::Cm33));
    assert!(ca35.is_empty());
    arbiter.with_authority(|authority| {
        assert!(authority.calls().contains(&AuthorityCall::Relinquish(PH4, CoreId::Ca35)));
        assert!(!authority.calls().contains(&AuthorityCall::Claim(PD8, CoreId::Ca35)));
    }).unwrap();
}

#[test]
fn shared_resource_released_with_last_user() {
    let arbiter = production();
    let mut ledger = LeaseLedger::new(CoreId::Ca35);

    let first = ledger.acquire_all(&arbiter, &[PH4, GATE_H]).unwrap();
    let second = ledger.acquire_all(&arbiter, &[GATE_H]).unwrap();
    assert_eq!(ledger.users(GATE_H), 2);
    arbiter.with_authority(|authority| assert_eq!(authority.claim_count(), 2)).unwrap();

    ledger.release_all(&arbiter, first).unwrap();
    assert_eq!(arbiter.owner(PH4), None);
    assert_eq!(arbiter.owner(GATE_H), Some(CoreId::Ca35));

    ledger.release_all(&arbiter, second).unwrap();
    assert_eq!(arbiter.owner(GATE_H), None);
    assert!(ledger.is_empty());
}

#[test]
fn rollback_keeps_resources_shared_with_other_leases() {
    let arbiter = production();
    let mut ledger = LeaseLedger::new(CoreId::Ca35);
    let _led = ledger.acquire_all(&arbiter, &[GATE_H]).unwrap();

    let mut other = LeaseLedger::new(CoreId::Cm33);
    let _blocker = other.acquire_all(&arbiter, &[PD8]).unwrap();

    assert!(ledger.acquire_all(&arbiter, &[GATE_H, PD8]).is_err());
    assert_eq!(ledger.users(GATE_H), 1);
    assert_eq!(arbiter.owner(GATE_H), Some(CoreId::Ca35));
}

#[test]
fn oversized_set_is_wrong_param() {
    let arbiter = production();
    let mut ledger = LeaseLedger::new(CoreId::Ca35);
    let set: std::vec::Vec<ResourceId> = (0..=MAX_LEASE as u16).map(ResourceId::uart).collect();

    assert_eq!(ledger.acquire_all(&arbiter, &set), Err(BspError::WrongParam));
    assert_eq!(arbiter.owned_count(), 0);
    assert!(ledger.is_empty());
}

#[test]
fn ledger_capacity_is_enforced_before_the_arbiter() {
    let arbiter = production();
    let mut ledger = LeaseLedger::new(CoreId::Ca35);
    for index in 0..MAX_LEASED as u16 {
        let _lease = ledger.acquire_all(&arbiter, &[ResourceId::uart(index)]).unwrap();
    }

    let extra = ResourceId::uart(MAX_LEASED as u16);
    assert_eq!(
        ledger.acquire_all(&arbiter, &[extra]),
        Err(BspError::InitializationFailure {
            resource: extra,
            source: ArbitrationError::TableFull { resource: extra },
        })
    );
    assert_eq!(arbiter.owner(extra), None);
}

#[test]
fn release_reports_first_denial_and_continues() {
    let arbiter = production();
    let mut ca35 = LeaseLedger::new(CoreId::Ca35);
    let lease = ca35.acquire_all(&arbiter, &[PH4, GATE_H]).unwrap();

    // Another ledger for the same core frees PH4 behind our back, then a
    // sibling takes it.
    let mut stray = LeaseLedger::new(CoreId::Ca35);
    let stray_lease = stray.acquire_all(&arbiter, &[PH4]).unwrap();
    stray.release_all(&arbiter, stray_lease).unwrap();
    let mut cm33 = LeaseLedger::new(CoreId::Cm33);
    let _taken = cm33.acquire_all(&arbiter, &[PH4]).unwrap();

    let err = ca35.release_all(&arbiter, lease).unwrap_err();
    assert_eq!(
        err,
        BspError::ReleaseDenied {
            resource: PH4,
            source: ArbitrationError::UnauthorizedRelease {
                resource: PH4,
                owner: CoreId::Cm33,
                caller: CoreId::Ca35,
            },
        }
    );
    // GATE_H was still released
    assert_eq!(arbiter.owner(GATE_H), None);
    assert!(ca35.is_empty());
}

#[test]
fn developer_boot_leases_without_ownership() {
    let arbiter = Arbiter::new(BootMode::Developer, MockAuthority::rejecting());
    let mut ca35 = LeaseLedger::new(CoreId::Ca35);
    let mut cm33 = LeaseLedger::new(CoreId::Cm33);

    let a = ca35.acquire_all(&arbiter, &[PH4]).unwrap();
    let b = cm33.acquire_all(&arbiter, &[PH4]).unwrap();
    assert_eq!(arbiter.owned_count(), 0);

    ca35.release_all(&arbiter, a).unwrap();
    cm33.release_all(&arbiter, b).unwrap();
}

// =============================================================================
// Property Tests
// =============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Acquire(usize, std::vec::Vec<u16>),
        Release(usize, usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..2, prop::collection::vec(0u16..6, 1..4)).prop_map(|(c, r)| Op::Acquire(c, r)),
            (0usize..2, 0usize..8).prop_map(|(c, i)| Op::Release(c, i)),
        ]
    }

    proptest! {
        /// Whatever the interleaving, a resource is held by at most one
        /// core's ledger and the arbiter agrees with it.
        #[test]
        fn ledgers_and_arbiter_agree(ops in prop::collection::vec(op_strategy(), 0..48)) {
            let arbiter = production();
            let mut ledgers = [LeaseLedger::new(CoreId::Ca35), LeaseLedger::new(CoreId::Cm33)];
            let mut leases: [std::vec::Vec<crate::lease::Lease>; 2] = [std::vec::Vec::new(), std::vec::Vec::new()];

            for op in ops {
                match op {
                    Op::Acquire(core, indices) => {
                        let set: std::vec::Vec<ResourceId> =
                            indices.into_iter().map(ResourceId::clock_gate).collect();
                        if let Ok(lease) = ledgers[core].acquire_all(&arbiter, &set) {
                            leases[core].push(lease);
                        }
                    }
                    Op::Release(core, index) => {
                        if index < leases[core].len() {
                            let lease = leases[core].remove(index);
                            prop_assert!(ledgers[core].release_all(&arbiter, lease).is_ok());
                        }
                    }
                }

                for gate in 0u16..6 {
                    let resource = ResourceId::clock_gate(gate);
                    let held = [ledgers[0].holds(resource), ledgers[1].holds(resource)];
                    prop_assert!(!(held[0] && held[1]));
                    let expected = if held[0] {
                        Some(CoreId::Ca35)
                    } else if held[1] {
                        Some(CoreId::Cm33)
                    } else {
                        None
                    };
                    prop_assert_eq!(arbiter.owner(resource), expected);
                }
            }
        }
    }
}
