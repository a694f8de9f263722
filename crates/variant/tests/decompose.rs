use pretty_assertions::assert_eq;
use twgloss_variant::{Decomposer, VariantPrefixMap};

#[test]
fn test_breakpoint_then_states() {
    let d = Decomposer::default().decompose("md:hover:bg-blue-500");
    assert_eq!(d.core, "bg-blue-500");
    assert_eq!(d.prefix(), "md:hover:");
    assert_eq!(
        d.decorate("Sets the background color to blue-500."),
        "At the md breakpoint (768px) and wider, when hovered, sets the background color to blue-500."
    );
}

#[test]
fn test_breakpoint_after_state_is_not_peeled() {
    let d = Decomposer::default().decompose("hover:md:p-4");
    assert_eq!(d.core, "md:p-4");
    assert_eq!(d.prefix(), "hover:");
}

#[test]
fn test_deep_stacking() {
    let d = Decomposer::default().decompose("2xl:dark:group-hover:focus-visible:first:underline");
    assert_eq!(d.core, "underline");
    let prefixes: Vec<&str> = d.states.iter().map(|v| v.prefix.as_str()).collect();
    assert_eq!(
        prefixes,
        vec!["dark:", "group-hover:", "focus-visible:", "first:"]
    );
}

#[test]
fn test_unknown_prefix_stays_in_core() {
    let d = Decomposer::default().decompose("supports-grid:grid");
    assert_eq!(d.core, "supports-grid:grid");
    assert!(!d.has_variants());
}

#[test]
fn test_custom_maps() {
    let responsive: VariantPrefixMap = [("tablet:", "on tablets, ")].into_iter().collect();
    let states: VariantPrefixMap = [("hocus:", "when hovered or focused, ")].into_iter().collect();
    let decomposer = Decomposer::new(responsive, states);

    let d = decomposer.decompose("tablet:hocus:flex");
    assert_eq!(d.core, "flex");
    assert_eq!(
        d.decorate("Displays as a flex container."),
        "On tablets, when hovered or focused, displays as a flex container."
    );
    assert_eq!(decomposer.decompose("md:flex").core, "md:flex");
}
