// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Multi-core arbitration scenarios.
//!
//! One arbiter, one board per core, each board on its own mock hardware.

// Test code prioritizes clarity over defensive programming
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]

use ev1_bsp::hal::{MockHal, UartInstance};
use ev1_bsp::{Board, BoardConfig, BspError, ComConfig, ComPort, Led, status_code};
use rif_abi::{BootMode, CoreId, GpioBank, Pin, ResourceId};
use rif_arbiter::{Arbiter, ArbitrationError, MockAuthority, resolve_boot_mode};

fn board(arbiter: &Arbiter<MockAuthority>, core: CoreId) -> Board<'_, MockAuthority, MockHal> {
    Board::new(BoardConfig::for_core(core), arbiter, MockHal::new())
}

// ============================================================================
// Production Boot
// ============================================================================

#[test]
fn led_handover_between_cores() {
    let arbiter = Arbiter::new(BootMode::Production, MockAuthority::new());
    let mut ca35 = board(&arbiter, CoreId::Ca35);
    let mut cm33 = board(&arbiter, CoreId::Cm33);

    ca35.led_init(Led::Led1).unwrap();
    let denied = cm33.led_init(Led::Led1);
    assert_eq!(status_code(&denied), BspError::MSP_FAILURE);
    assert!(cm33.hal().events().is_empty());

    ca35.led_on(Led::Led1).unwrap();
    ca35.led_deinit(Led::Led1).unwrap();

    cm33.led_init(Led::Led1).unwrap();
    cm33.led_toggle(Led::Led1).unwrap();
    assert!(cm33.led_state(Led::Led1).unwrap());
    assert_eq!(
        arbiter.owner(ResourceId::gpio(Pin::fixed(GpioBank::H, 4))),
        Some(CoreId::Cm33)
    );
}

#[test]
fn cores_share_the_board_without_overlap() {
    let arbiter = Arbiter::new(BootMode::Production, MockAuthority::new());
    let mut ca35 = board(&arbiter, CoreId::Ca35);
    let mut cm33 = board(&arbiter, CoreId::Cm33);
    let mut cm0 = board(&arbiter, CoreId::Cm0Plus);

    ca35.com_init(ComPort::Com1, &ComConfig::DEFAULT).unwrap();
    ca35.led_init(Led::Led1).unwrap();
    cm33.com_init(ComPort::Com2, &ComConfig::DEFAULT).unwrap();
    cm33.led_init(Led::Led2).unwrap();
    cm0.com_init(ComPort::Com3, &ComConfig::DEFAULT).unwrap();

    // Each core's console reaches its own terminal
    cm33.console().unwrap();
    ca35.console().unwrap();
    cm0.console().unwrap();

    assert_eq!(arbiter.held_by(CoreId::Ca35), 6);
    assert_eq!(arbiter.held_by(CoreId::Cm33), 6);
    assert_eq!(arbiter.held_by(CoreId::Cm0Plus), 3);

    // Nobody can take a sibling's console
    assert!(ca35.com_init(ComPort::Com2, &ComConfig::DEFAULT).is_err());
    assert!(cm33.com_init(ComPort::Com3, &ComConfig::DEFAULT).is_err());
}

#[test]
fn second_resource_denied_releases_the_first() {
    let arbiter = Arbiter::new(BootMode::Production, MockAuthority::new());
    let pg9 = ResourceId::gpio(Pin::fixed(GpioBank::G, 9));
    let pg10 = ResourceId::gpio(Pin::fixed(GpioBank::G, 10));
    assert!(arbiter.request(pg10, CoreId::Cm33).is_granted());

    let mut ca35 = board(&arbiter, CoreId::Ca35);
    assert_eq!(
        ca35.com_init(ComPort::Com2, &ComConfig::DEFAULT),
        Err(BspError::InitializationFailure {
            resource: pg10,
            source: ArbitrationError::Contention {
                resource: pg10,
                owner: CoreId::Cm33,
            },
        })
    );

    assert_eq!(arbiter.owner(pg9), None);
    assert_eq!(arbiter.owner(UartInstance::UART5.resource()), None);
    assert_eq!(arbiter.held_by(CoreId::Ca35), 0);
    assert!(ca35.into_hal().events().is_empty());
}

#[test]
fn isolation_authority_vetoes_first_claim() {
    let uart5 = UartInstance::UART5.resource();
    let authority = MockAuthority::new().with_assignment(uart5, CoreId::Cm33);
    let arbiter = Arbiter::new(BootMode::Production, authority);

    let mut ca35 = board(&arbiter, CoreId::Ca35);
    let err = ca35.com_init(ComPort::Com2, &ComConfig::DEFAULT).unwrap_err();
    assert!(matches!(
        err,
        BspError::InitializationFailure {
            source: ArbitrationError::AuthorityRejected { .. },
            ..
        }
    ));
    assert_eq!(arbiter.owned_count(), 0);

    let mut cm33 = board(&arbiter, CoreId::Cm33);
    cm33.com_init(ComPort::Com2, &ComConfig::DEFAULT).unwrap();
}

// ============================================================================
// Developer Boot
// ============================================================================

#[test]
fn developer_boot_from_strap_skips_arbitration() {
    let mode = resolve_boot_mode(&Some(0b0011u8));
    assert_eq!(mode, BootMode::Developer);

    let arbiter = Arbiter::new(mode, MockAuthority::rejecting());
    let mut ca35 = board(&arbiter, CoreId::Ca35);
    let mut cm33 = board(&arbiter, CoreId::Cm33);

    ca35.led_init(Led::Led1).unwrap();
    cm33.led_init(Led::Led1).unwrap();
    ca35.com_init(ComPort::Com2, &ComConfig::DEFAULT).unwrap();
    cm33.com_init(ComPort::Com2, &ComConfig::DEFAULT).unwrap();

    assert_eq!(arbiter.owned_count(), 0);
    arbiter.with_authority(|authority| assert!(authority.calls().is_empty())).unwrap();

    ca35.led_deinit(Led::Led1).unwrap();
    cm33.com_deinit(ComPort::Com2).unwrap();
}

#[test]
fn unreadable_or_other_strap_is_production() {
    assert_eq!(resolve_boot_mode(&None::<u8>), BootMode::Production);
    assert_eq!(resolve_boot_mode(&Some(0b0001u8)), BootMode::Production);
    assert_eq!(resolve_boot_mode(&Some(0b0111u8)), BootMode::Production);
}
