use super::filter_offices;
use shared::domain::Office;

fn st_louis_offices() -> Vec<Office> {
    vec![
        Office::new("AFTON (003)", "9513 Gravois Rd, Afton", "(314) 631-1311"),
        Office::new(
            "CLAYTON (162)",
            "141 N Meramec Ave Ste 201, Clayton",
            "(314) 499-7223",
        ),
    ]
}

#[test]
fn empty_query_returns_every_office_in_order() {
    let offices = st_louis_offices();
    assert_eq!(filter_offices(&offices, ""), offices);
}

#[test]
fn whitespace_only_query_is_treated_as_empty() {
    let offices = st_louis_offices();
    assert_eq!(filter_offices(&offices, "   \t "), offices);
}

#[test]
fn query_is_trimmed_before_matching() {
    let offices = st_louis_offices();
    let hits = filter_offices(&offices, "  gravois  ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "AFTON (003)");
}

#[test]
fn matching_is_case_insensitive() {
    let offices = st_louis_offices();
    assert_eq!(filter_offices(&offices, "CLAYTON").len(), 1);
    assert_eq!(filter_offices(&offices, "clayton").len(), 1);
    assert_eq!(filter_offices(&offices, "ClAyToN").len(), 1);
}

#[test]
fn street_fragment_matches_only_that_office() {
    let offices = st_louis_offices();
    let hits = filter_offices(&offices, "gravois");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "AFTON (003)");
}

#[test]
fn shared_area_code_matches_both_offices() {
    let offices = st_louis_offices();
    let hits = filter_offices(&offices, "314");
    assert_eq!(hits.len(), 2);
}

#[test]
fn phone_fragment_matches_through_the_joined_haystack() {
    let offices = st_louis_offices();
    let hits = filter_offices(&offices, "631-1311");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "AFTON (003)");
}

#[test]
fn unmatched_query_returns_nothing() {
    let offices = st_louis_offices();
    assert!(filter_offices(&offices, "kansas city").is_empty());
}

#[test]
fn query_spanning_name_and_address_boundary_matches() {
    let offices = vec![Office::new("HILLSBORO", "10 Elm St", "(636) 555-0100")];
    // Name and address are joined with a single space.
    let hits = filter_offices(&offices, "hillsboro 10 elm");
    assert_eq!(hits.len(), 1);
}

#[test]
fn relative_order_of_matches_is_preserved() {
    let offices = vec![
        Office::new("A", "Main St", "1"),
        Office::new("B", "Side St", "2"),
        Office::new("C", "Main Ave", "3"),
    ];
    let hits = filter_offices(&offices, "main");
    let names: Vec<&str> = hits.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
}
