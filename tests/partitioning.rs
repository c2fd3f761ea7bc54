//! Equivalence-class tests for every public IRMS operation

use irms::{AllowListBadges, Irms, IrmsError, Role};

const ANALYST: &str = "analystA";
const PASSWORD: &str = "Password1!";

fn setup() -> Irms {
    let mut irms = Irms::new(AllowListBadges::new(["1234", "1235"]));
    irms.register_analyst(ANALYST, PASSWORD)
        .expect("seed analyst should register");
    irms
}

fn login(irms: &mut Irms) {
    irms.authenticate(ANALYST, PASSWORD)
        .expect("seed analyst should authenticate");
}

// ---------- register_analyst ----------

#[test]
fn register_duplicate_name() {
    let mut irms = setup();
    let result = irms.register_analyst(ANALYST, "GoodPass1!");
    assert!(matches!(result, Err(IrmsError::DuplicateAnalyst { .. })));
}

#[test]
fn register_name_too_short() {
    let mut irms = setup();
    let result = irms.register_analyst("abc", "GoodPass1!");
    assert!(matches!(result, Err(IrmsError::InvalidAnalystName { .. })));
    assert!(!irms.is_registered("abc"));
}

#[test]
fn register_name_illegal_chars() {
    let mut irms = setup();
    let result = irms.register_analyst("john_", "GoodPass1!");
    assert!(matches!(result, Err(IrmsError::InvalidAnalystName { .. })));
}

#[test]
fn register_rejects_bad_passwords() {
    let cases = [
        ("A1!aaaaa", "too short"),
        ("Abcdefghij12345!!", "too long"),
        ("Abcdef1234", "missing special"),
        ("Abcdef!@#$", "missing digit"),
        ("12345!@#$%", "missing letter"),
        ("Abcdefghij", "letters only"),
        ("1234567890", "digits only"),
        ("!@#$%^&*()", "specials only"),
    ];

    for (password, why) in cases {
        let mut irms = setup();
        let result = irms.register_analyst("john", password);
        assert!(
            matches!(result, Err(IrmsError::InvalidPassword { .. })),
            "{why}: {password} should be rejected"
        );
        assert!(!irms.is_registered("john"));
    }
}

#[test]
fn register_success() {
    let mut irms = setup();
    irms.register_analyst("john", "GoodPass1!").unwrap();
    assert!(irms.is_registered("john"));
    assert!(!irms.is_authenticated("john"));
    assert_eq!(irms.get_analyst_role("john"), Some(Role::Member));
}

// ---------- authenticate ----------

#[test]
fn authenticate_unregistered() {
    let mut irms = setup();
    let result = irms.authenticate("ghost", "anything!");
    assert!(matches!(result, Err(IrmsError::NoSuchAnalyst { .. })));
}

#[test]
fn authenticate_success() {
    let mut irms = setup();
    irms.authenticate(ANALYST, PASSWORD).unwrap();
    assert!(irms.is_authenticated(ANALYST));
}

#[test]
fn authenticate_wrong_password_clears_flag() {
    let mut irms = setup();
    login(&mut irms);
    assert!(irms.is_authenticated(ANALYST));

    let result = irms.authenticate(ANALYST, "Wrong!!!!");
    assert!(matches!(result, Err(IrmsError::IncorrectPassword { .. })));
    assert!(!irms.is_authenticated(ANALYST));
}

// ---------- request_supervisor_access ----------

#[test]
fn supervisor_unregistered() {
    let mut irms = setup();
    let result = irms.request_supervisor_access("ghost", "1234");
    assert!(matches!(result, Err(IrmsError::NoSuchAnalyst { .. })));
}

#[test]
fn supervisor_invalid_badge() {
    let mut irms = setup();
    irms.register_analyst("john", "GoodPass1!").unwrap();
    let result = irms.request_supervisor_access("john", "9999");
    assert!(matches!(result, Err(IrmsError::InvalidBadgeId { .. })));
    assert_eq!(irms.get_analyst_role("john"), Some(Role::Member));
}

#[test]
fn supervisor_promotion_without_authentication() {
    let mut irms = setup();
    assert!(!irms.is_authenticated(ANALYST));
    irms.request_supervisor_access(ANALYST, "1234").unwrap();
    assert_eq!(irms.get_analyst_role(ANALYST), Some(Role::Supervisor));
}

#[test]
fn supervisor_repeat_request_is_noop() {
    let mut irms = setup();
    irms.request_supervisor_access(ANALYST, "1234").unwrap();
    irms.request_supervisor_access(ANALYST, "1235").unwrap();
    irms.request_supervisor_access(ANALYST, "1234").unwrap();
    assert_eq!(irms.get_analyst_role(ANALYST), Some(Role::Supervisor));
    assert!(!irms.is_authenticated(ANALYST));
}

// ---------- submit_incident ----------

#[test]
fn submit_unregistered() {
    let mut irms = setup();
    let result = irms.submit_incident("ghost", "G1", 5);
    assert!(matches!(result, Err(IrmsError::NoSuchAnalyst { .. })));
    assert!(!irms.is_saved_incident("G1", 5));
}

#[test]
fn submit_unauthenticated() {
    let mut irms = setup();
    let result = irms.submit_incident(ANALYST, "U1", 5);
    assert!(matches!(
        result,
        Err(IrmsError::UnauthenticatedAnalyst { .. })
    ));
    assert!(!irms.is_saved_incident("U1", 5));
}

#[test]
fn submit_duplicate_id() {
    let mut irms = setup();
    login(&mut irms);
    irms.submit_incident(ANALYST, "DUP1", 5).unwrap();

    let result = irms.submit_incident(ANALYST, "DUP1", 7);
    assert!(matches!(result, Err(IrmsError::DuplicateIncident { .. })));
    assert!(!irms.is_saved_incident("DUP1", 7));
    assert!(irms.is_saved_incident("DUP1", 5));
}

#[test]
fn submit_rating_out_of_range() {
    let mut irms = setup();
    login(&mut irms);
    for (id, rating) in [("RLOW1", -1), ("RHIGH1", 10)] {
        let result = irms.submit_incident(ANALYST, id, rating);
        assert!(matches!(result, Err(IrmsError::InvalidRating { .. })));
        assert!(!irms.is_saved_incident(id, rating));
    }
}

#[test]
fn submit_supervisor_accepts_any() {
    let mut irms = setup();
    irms.request_supervisor_access(ANALYST, "1234").unwrap();
    login(&mut irms);
    irms.submit_incident(ANALYST, "S1", 0).unwrap();
    irms.submit_incident(ANALYST, "S2", 9).unwrap();
    assert!(irms.is_saved_incident("S1", 0));
    assert!(irms.is_saved_incident("S2", 9));
}

#[test]
fn submit_member_first_incident_accepted() {
    let mut irms = setup();
    login(&mut irms);
    irms.submit_incident(ANALYST, "M0", 0).unwrap();
    assert!(irms.is_saved_incident("M0", 0));
}

#[test]
fn submit_member_above_lowest_accepted() {
    let mut irms = setup();
    login(&mut irms);
    irms.submit_incident(ANALYST, "M1", 3).unwrap();
    irms.submit_incident(ANALYST, "M2", 4).unwrap();
    irms.submit_incident(ANALYST, "M3", 4).unwrap();
    assert!(irms.is_saved_incident("M3", 4));
}

#[test]
fn submit_member_at_lowest_rejected() {
    let mut irms = setup();
    login(&mut irms);
    irms.submit_incident(ANALYST, "M1", 3).unwrap();
    irms.submit_incident(ANALYST, "M2", 4).unwrap();

    let result = irms.submit_incident(ANALYST, "M3", 3);
    assert!(matches!(result, Err(IrmsError::IncidentReject { .. })));
    assert!(!irms.is_saved_incident("M3", 3));
    assert_eq!(irms.incident_count(ANALYST), 2);
}

// ---------- get_incident ----------

#[test]
fn get_unregistered() {
    let irms = setup();
    let result = irms.get_incident("ghost", 0);
    assert!(matches!(result, Err(IrmsError::NoSuchAnalyst { .. })));
}

#[test]
fn get_index_out_of_bounds() {
    let mut irms = setup();
    login(&mut irms);
    irms.submit_incident(ANALYST, "G2-A", 4).unwrap();
    irms.submit_incident(ANALYST, "G2-B", 7).unwrap();

    for index in [-1, 2] {
        let result = irms.get_incident(ANALYST, index);
        assert!(matches!(result, Err(IrmsError::IndexOutOfBounds { .. })));
    }
}

#[test]
fn get_valid_index() {
    let mut irms = setup();
    login(&mut irms);
    irms.submit_incident(ANALYST, "G1", 7).unwrap();

    let (id, rating) = irms.get_incident(ANALYST, 0).unwrap();
    assert_eq!(id, "G1");
    assert_eq!(rating, 7);
}

#[test]
fn get_on_empty_history() {
    let irms = setup();
    let result = irms.get_incident(ANALYST, 0);
    assert!(matches!(
        result,
        Err(IrmsError::IndexOutOfBounds { index: 0, len: 0 })
    ));
}
