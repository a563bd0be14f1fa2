use regex::Regex;

use comfyui_sdxl_styles::{
    config::StylesConfig,
    style::{NodeRegistry, BYPASS, NODE_DEFINITIONS},
};

fn registry() -> NodeRegistry {
    NodeRegistry::init(&StylesConfig::default())
}

#[test]
fn test_all_nodes_registered() {
    let registry = registry();
    assert_eq!(registry.len(), NODE_DEFINITIONS.len());
    assert_eq!(registry.class_mappings().len(), NODE_DEFINITIONS.len());
    assert_eq!(registry.display_name_mappings().len(), NODE_DEFINITIONS.len());
}

#[test]
fn test_valid_class_names() -> anyhow::Result<()> {
    let class_name = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$")?;
    for (id, node) in registry().class_mappings() {
        assert_eq!(id, node.id());
        assert!(class_name.is_match(id), "invalid class name: {id}");
    }
    Ok(())
}

#[test]
fn test_display_names() {
    let registry = registry();
    let display_names = registry.display_name_mappings();
    for (_, display_name) in NODE_DEFINITIONS {
        let id = display_name.replace(' ', "");
        assert_eq!(display_names.get(id.as_str()), Some(display_name));
    }
}

#[test]
fn test_nodes_have_templates() {
    for register in registry().iter() {
        let styles = register.node().styles();
        assert!(styles.len() > 1, "no styles loaded for {}", register.node());
        assert!(styles.contains(BYPASS));
        assert_eq!(styles.names()[0], BYPASS);
    }
}

#[test]
fn test_apply_bundled_style() {
    let registry = registry();
    let node = registry.get("ApplySDXLStyleSAI").unwrap();

    let (positive, negative) = node.execute("a cat", "text", "sai-anime", true, false);
    assert_eq!(
        positive,
        "anime artwork a cat . anime style, key visual, vibrant, studio anime, highly detailed"
    );
    assert_eq!(
        negative,
        "text photo, deformed, black and white, realism, disfigured, low contrast"
    );

    assert_eq!(
        node.execute("a cat", "text", "unknown style", false, false),
        ("a cat".to_string(), "text".to_string())
    );
}
