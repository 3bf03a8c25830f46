use catalog_pk_report::primary_key_report::domain::model::value_objects::primary_key_list::{
    PrimaryKeyList,
};

#[test]
fn parse_trims_each_key_and_keeps_order() {
    let keys = PrimaryKeyList::parse(" a ,b,  c ");

    assert_eq!(keys.values(), ["a", "b", "c"]);
}

#[test]
fn parse_preserves_original_casing() {
    let keys = PrimaryKeyList::parse("Account, ACCOUNT_ID,id");

    assert_eq!(keys.values(), ["Account", "ACCOUNT_ID", "id"]);
}

#[test]
fn parse_of_empty_string_yields_single_empty_key() {
    let keys = PrimaryKeyList::parse("");

    assert_eq!(keys.values(), [""]);
    assert_eq!(keys.values().len(), 1);
}

#[test]
fn parse_keeps_blank_fragments() {
    assert_eq!(PrimaryKeyList::parse("a,").values(), ["a", ""]);
    assert_eq!(PrimaryKeyList::parse("a, ,b").values(), ["a", "", "b"]);
    assert_eq!(PrimaryKeyList::parse(",").values(), ["", ""]);
}

#[test]
fn parse_yields_one_trimmed_key_per_comma_separated_piece() {
    let inputs = [
        "",
        " ",
        "id",
        "\tid\n",
        "a,b,c",
        " a , b , c ",
        ",,",
        "first name, last name",
        "x,\t,y ",
    ];

    for raw in inputs {
        let keys = PrimaryKeyList::parse(raw);

        assert_eq!(keys.values().len(), raw.split(',').count(), "input: {raw:?}");
        for key in keys.iter() {
            assert_eq!(key, key.trim(), "input: {raw:?}");
        }
    }
}

#[test]
fn parse_keeps_inner_whitespace() {
    let keys = PrimaryKeyList::parse(" first name ,last name");

    assert_eq!(keys.values(), ["first name", "last name"]);
}
