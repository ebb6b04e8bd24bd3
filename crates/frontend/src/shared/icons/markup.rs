//! Passes over the icon placeholders of the markup.

use super::IconNameMap;

/// Markup host holding icon placeholders (`<i data-feather="…">`)
pub trait IconMarkup {
    type Placeholder;

    /// Placeholders not yet rendered, in document order
    fn placeholders(&self) -> Vec<Self::Placeholder>;

    fn icon_name(&self, icon: &Self::Placeholder) -> Option<String>;

    fn set_icon_name(&self, icon: &Self::Placeholder, name: &str);

    fn hide(&self, icon: &Self::Placeholder);

    /// Trimmed text content of the element the icon decorates
    fn container_text(&self, icon: &Self::Placeholder) -> Option<String>;

    fn show_container_inline(&self, icon: &Self::Placeholder);

    /// Insert a text node right before the placeholder
    fn insert_label(&self, icon: &Self::Placeholder, label: &str);
}

/// Text stand-in for an icon that cannot be rendered
pub fn fallback_label(name: &str) -> String {
    format!(" [{}] ", name)
}

/// Rewrite every placeholder to the name the library understands.
/// Returns the number of renamed placeholders.
pub fn normalize_names<M: IconMarkup>(markup: &M, names: &IconNameMap) -> usize {
    let mut renamed = 0;
    for icon in markup.placeholders() {
        let Some(current) = markup.icon_name(&icon) else {
            continue;
        };
        let resolved = names.resolve(&current);
        if resolved != current {
            markup.set_icon_name(&icon, resolved);
            renamed += 1;
        }
    }
    renamed
}

/// Degraded mode: hide every placeholder and, where the icon decorates a
/// text, put the icon id next to the text so nothing is lost.
///
/// A container whose text already mentions the id gets no second label,
/// which makes repeated passes harmless. Returns the number of labels
/// inserted.
pub fn degrade<M: IconMarkup>(markup: &M) -> usize {
    let mut labelled = 0;
    for icon in markup.placeholders() {
        markup.hide(&icon);

        let text = markup.container_text(&icon).unwrap_or_default();
        if text.is_empty() {
            continue;
        }
        markup.show_container_inline(&icon);

        if let Some(name) = markup.icon_name(&icon).filter(|n| !n.is_empty()) {
            if !text.contains(&name) {
                markup.insert_label(&icon, &fallback_label(&name));
                labelled += 1;
            }
        }
    }
    labelled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::icons::testing::{MemoryMarkup, Node};

    #[test]
    fn test_degrade_labels_only_icons_next_to_text() {
        let markup = MemoryMarkup::default();
        let open = markup.add_container(vec![Node::icon("icon-name"), Node::text("Open")]);
        let bare = markup.add_container(vec![Node::icon("icon-name")]);

        assert_eq!(degrade(&markup), 1);

        assert_eq!(markup.rendered_text(open), "[icon-name] Open");
        assert!(markup.all_icons_hidden(open));
        assert!(markup.is_inline(open));

        assert_eq!(markup.rendered_text(bare), "");
        assert!(markup.all_icons_hidden(bare));
        assert!(!markup.is_inline(bare));
    }

    #[test]
    fn test_degrade_skips_text_that_already_names_the_icon() {
        let markup = MemoryMarkup::default();
        let c = markup.add_container(vec![Node::icon("package"), Node::text("package list")]);

        assert_eq!(degrade(&markup), 0);
        assert_eq!(markup.rendered_text(c), "package list");
        assert!(markup.all_icons_hidden(c));
    }

    #[test]
    fn test_degrade_twice_does_not_duplicate_labels() {
        let markup = MemoryMarkup::default();
        let c = markup.add_container(vec![Node::icon("x"), Node::text("Fechar")]);

        assert_eq!(degrade(&markup), 1);
        assert_eq!(degrade(&markup), 0);
        assert_eq!(markup.rendered_text(c), "[x] Fechar");
    }

    #[test]
    fn test_normalize_rewrites_aliases_only() {
        let markup = MemoryMarkup::default();
        markup.add_container(vec![Node::icon("lightbulb"), Node::text("Caso Similar")]);
        markup.add_container(vec![Node::icon("package"), Node::icon("building")]);

        assert_eq!(normalize_names(&markup, &IconNameMap::feather()), 2);
        assert_eq!(markup.icon_names(), vec!["zap", "package", "home"]);
        assert_eq!(normalize_names(&markup, &IconNameMap::feather()), 0);
    }
}
