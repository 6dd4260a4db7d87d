use icon_contract::{is_valid_attribute_name, wrap, IconNode, IconProperties, VectorPrimitive};
use leptos::*;

/// Splits container attributes into those the DOM accepts and the names it would reject.
fn partition_attributes(node: &IconNode) -> (Vec<(String, String)>, Vec<String>) {
    let mut mountable = Vec::new();
    let mut rejected = Vec::new();
    for attribute in node.attributes() {
        if is_valid_attribute_name(attribute.name()) {
            mountable.push((attribute.name().to_string(), attribute.value().to_string()));
        } else {
            rejected.push(attribute.name().to_string());
        }
    }
    (mountable, rejected)
}

fn mount(node: &IconNode) -> impl IntoView {
    let (mountable, rejected) = partition_attributes(node);
    for name in rejected {
        logging::warn!("icon attribute `{name}` skipped: not a valid attribute name");
    }

    let mut element = leptos::svg::svg();
    for (name, value) in mountable {
        element = element.attr(name, value);
    }
    element.inner_html(node.children_markup())
}

#[component]
/// Shared icon container: renders `primitives` in order inside an SVG whose default
/// presentation attributes are overridden by `properties`.
pub fn IconWrapper(
    #[prop(optional)] properties: IconProperties,
    primitives: &'static [VectorPrimitive],
) -> impl IntoView {
    mount(&wrap(&properties, primitives))
}

#[cfg(test)]
mod tests {
    use icon_contract::IconSize;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partition_keeps_attribute_order() {
        let node = wrap(
            &IconProperties::new()
                .size(IconSize::Xs)
                .attribute("data-slot", "tray"),
            &[],
        );
        let (mountable, rejected) = partition_attributes(&node);

        assert!(rejected.is_empty());
        assert_eq!(mountable.len(), node.attributes().len());
        assert_eq!(mountable[2], ("width".to_string(), "14".to_string()));
        assert_eq!(
            mountable.last(),
            Some(&("data-slot".to_string(), "tray".to_string()))
        );
    }

    #[test]
    fn partition_rejects_names_the_dom_would_refuse() {
        let node = wrap(
            &IconProperties::new()
                .attribute("on click", "x")
                .attribute("", "y")
                .attribute("@click", "z")
                .attribute("1x", "w")
                .attribute("data-ok", "z"),
            &[],
        );
        let (mountable, rejected) = partition_attributes(&node);

        assert_eq!(
            rejected,
            vec![
                "on click".to_string(),
                String::new(),
                "@click".to_string(),
                "1x".to_string(),
            ]
        );
        assert!(mountable.iter().any(|(name, _)| name == "data-ok"));
        assert!(mountable.iter().all(|(name, _)| is_valid_attribute_name(name)));
    }
}
