use panel_authz::{rank_of, Role, UNKNOWN_RANK};

#[test]
fn rank_table_matches_the_panel_hierarchy() {
    let expected = [
        ("OWNER", 9),
        ("SUB_OWNER", 8),
        ("SUPER_ADMIN", 7),
        ("ADMIN", 6),
        ("SUB", 5),
        ("MASTER", 4),
        ("SUPER_AGENT", 3),
        ("AGENT", 2),
        ("USER", 1),
    ];
    for (role, rank) in expected {
        assert_eq!(rank_of(role), rank, "rank of {}", role);
    }
}

#[test]
fn ranks_form_a_strict_total_order() {
    for a in Role::ALL {
        for b in Role::ALL {
            if a == b {
                continue;
            }
            let above = a.rank() > b.rank();
            let below = a.rank() < b.rank();
            assert!(above ^ below, "{} and {} must not share a rank", a, b);
        }
    }
}

#[test]
fn unknown_roles_rank_below_everyone() {
    assert_eq!(rank_of("NOT_A_ROLE"), UNKNOWN_RANK);
    assert_eq!(rank_of(""), 0);
    assert_eq!(rank_of("owner"), 0);
    for role in Role::ALL {
        assert!(role.rank() > rank_of("NOT_A_ROLE"));
    }
}

#[test]
fn from_rank_inverts_rank() {
    for role in Role::ALL {
        assert_eq!(Role::from_rank(role.rank()), Some(role));
    }
    assert_eq!(Role::from_rank(0), None);
    assert_eq!(Role::from_rank(10), None);
}

#[test]
fn display_matches_wire_identifier() {
    for role in Role::ALL {
        assert_eq!(role.to_string(), role.as_str());
        assert_eq!(Role::parse(&role.to_string()), Some(role));
    }
    assert_eq!(Role::SuperAgent.label(), "Super Agent");
}

#[test]
fn walking_down_from_owner_visits_every_role() {
    let mut chain = vec![Role::Owner];
    while let Some(next) = chain.last().and_then(|r| r.direct_child()) {
        chain.push(next);
    }
    assert_eq!(chain, Role::ALL.to_vec());
}
