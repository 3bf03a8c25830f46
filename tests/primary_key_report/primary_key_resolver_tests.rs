use catalog_pk_report::primary_key_report::domain::{
    model::{
        entities::{
            resolved_primary_key::ResolvedPrimaryKey, table_declaration::TableDeclaration,
        },
        value_objects::primary_key_list::PrimaryKeyList,
    },
    services::primary_key_resolver::PrimaryKeyResolver,
};

use crate::support::{column, table};

fn key_pairs(item: &ResolvedPrimaryKey) -> Vec<(String, String)> {
    item.keys()
        .iter()
        .map(|key| (key.key_name.clone(), key.column_type.clone()))
        .collect()
}

#[test]
fn resolve_matches_case_insensitively_and_keeps_declared_casing() {
    let tables = vec![table("users", "ID")];
    let columns = vec![column("users", "id", "INT")];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].table_name(), "users");
    assert_eq!(
        key_pairs(&resolved[0]),
        vec![("ID".to_string(), "INT".to_string())]
    );
}

#[test]
fn resolve_matches_every_declared_key_of_a_composite_list() {
    let tables = vec![table("accounts", "account, account_id")];
    let columns = vec![
        column("accounts", "ACCOUNT", "VARCHAR(32)"),
        column("accounts", "ACCOUNT_ID", "INT"),
    ];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].keys().get("account"), Some("VARCHAR(32)"));
    assert_eq!(resolved[0].keys().get("account_id"), Some("INT"));
    assert_eq!(resolved[0].keys().len(), 2);
}

#[test]
fn resolve_omits_tables_without_columns() {
    let tables = vec![table("orders", "order_id")];

    let resolved = PrimaryKeyResolver::resolve(&tables, &[]);

    assert!(resolved.is_empty());
}

#[test]
fn resolve_omits_tables_with_no_declared_keys() {
    let tables = vec![TableDeclaration::new("audit", PrimaryKeyList::default())];
    let columns = vec![column("audit", "id", "INT")];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert!(resolved.is_empty());
}

#[test]
fn resolve_requires_exact_table_name_match() {
    let tables = vec![table("Users", "id")];
    let columns = vec![column("users", "id", "INT")];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert!(resolved.is_empty());
}

#[test]
fn resolve_ignores_columns_of_other_tables() {
    let tables = vec![table("users", "id"), table("accounts", "id")];
    let columns = vec![
        column("accounts", "id", "BIGINT"),
        column("users", "name", "VARCHAR(32)"),
    ];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].table_name(), "accounts");
    assert_eq!(
        key_pairs(&resolved[0]),
        vec![("id".to_string(), "BIGINT".to_string())]
    );
}

#[test]
fn resolve_preserves_table_order() {
    let tables = vec![table("zeta", "id"), table("alpha", "id"), table("mid", "id")];
    let columns = vec![
        column("alpha", "id", "INT"),
        column("mid", "id", "INT"),
        column("zeta", "id", "INT"),
    ];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    let names = resolved
        .iter()
        .map(|item| item.table_name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn resolve_orders_keys_by_first_match() {
    let tables = vec![table("t", "b, a")];
    let columns = vec![column("t", "A", "X"), column("t", "B", "Y")];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert_eq!(
        key_pairs(&resolved[0]),
        vec![
            ("a".to_string(), "X".to_string()),
            ("b".to_string(), "Y".to_string()),
        ]
    );
}

#[test]
fn resolve_lets_the_last_colliding_column_win_in_place() {
    let tables = vec![table("t", "a, b")];
    let columns = vec![
        column("t", "A", "INT"),
        column("t", "b", "VARCHAR(8)"),
        column("t", "a", "BIGINT"),
    ];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert_eq!(
        key_pairs(&resolved[0]),
        vec![
            ("a".to_string(), "BIGINT".to_string()),
            ("b".to_string(), "VARCHAR(8)".to_string()),
        ]
    );
}

#[test]
fn resolve_keeps_blank_keys_unmatched() {
    let tables = vec![table("users", "id,")];
    let columns = vec![column("users", "id", "INT")];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert_eq!(
        key_pairs(&resolved[0]),
        vec![("id".to_string(), "INT".to_string())]
    );
}

#[test]
fn resolve_never_matches_blank_keys_against_blank_column_names() {
    let tables = vec![table("users", "id,")];
    let columns = vec![column("users", "", "INT"), column("users", " ", "TEXT")];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert!(resolved.is_empty());
}

#[test]
fn resolve_folds_non_ascii_letters() {
    let tables = vec![table("städte", "ÄRA_ID")];
    let columns = vec![column("städte", "ära_id", "INT")];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    assert_eq!(resolved[0].keys().get("ÄRA_ID"), Some("INT"));
}

#[test]
fn resolve_is_idempotent() {
    let tables = vec![
        table("users", "ID"),
        table("accounts", "account, account_id"),
    ];
    let columns = vec![
        column("users", "id", "INT"),
        column("accounts", "ACCOUNT", "VARCHAR(32)"),
        column("accounts", "ACCOUNT_ID", "INT"),
    ];

    let first = PrimaryKeyResolver::resolve(&tables, &columns);
    let second = PrimaryKeyResolver::resolve(&tables, &columns);

    assert_eq!(first, second);
}

#[test]
fn resolve_match_count_equals_total_key_entries() {
    let tables = vec![table("users", "id, email"), table("logs", "log_id")];
    let columns = vec![
        column("users", "ID", "INT"),
        column("users", "EMAIL", "VARCHAR(64)"),
        column("users", "name", "VARCHAR(32)"),
        column("logs", "message", "TEXT"),
    ];

    let resolved = PrimaryKeyResolver::resolve(&tables, &columns);

    let total = resolved.iter().map(|item| item.keys().len()).sum::<usize>();
    assert_eq!(total, 2);
}
