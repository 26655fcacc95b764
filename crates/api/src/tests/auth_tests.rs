// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atelier_audit::Actor;
use atelier_domain::Party;

use crate::{AuthError, AuthenticatedActor, Role, authenticate_stub};

#[test]
fn test_authenticate_stub_accepts_client_and_admin() {
    let client: AuthenticatedActor = authenticate_stub("client-1", "client").unwrap();
    assert_eq!(client.id, "client-1");
    assert_eq!(client.role, Role::Client);

    let admin: AuthenticatedActor = authenticate_stub(" staff-1 ", "ADMIN").unwrap();
    assert_eq!(admin.id, "staff-1");
    assert_eq!(admin.role, Role::Admin);
}

#[test]
fn test_authenticate_stub_rejects_empty_id() {
    let result: Result<AuthenticatedActor, AuthError> = authenticate_stub("   ", "client");
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_authenticate_stub_rejects_unknown_role() {
    let result: Result<AuthenticatedActor, AuthError> = authenticate_stub("x", "seamstress");
    match result {
        Err(AuthError::AuthenticationFailed { reason }) => {
            assert!(reason.contains("seamstress"));
        }
        other => panic!("Expected AuthenticationFailed, got {other:?}"),
    }
}

#[test]
fn test_role_maps_to_party() {
    assert_eq!(Role::Client.party(), Party::User);
    assert_eq!(Role::Admin.party(), Party::Admin);
    assert_eq!("user".parse::<Role>().unwrap(), Role::Client);
    assert_eq!(Role::Admin.to_string(), "admin");
}

#[test]
fn test_to_actor_carries_id_and_party() {
    let actor: Actor = AuthenticatedActor::new(String::from("client-7"), Role::Client).to_actor();
    assert_eq!(actor, Actor::client("client-7"));
}
