use tracing::{debug, warn};

use crate::descriptors::{
    CheckBoxDescriptor, ChoiceDescriptor, DescriptorView, FloatSliderDescriptor, InputDescriptor,
    SettingDescriptor, SettingsItem, SliderDescriptor, SliderRange,
};
use crate::domain::{ChoiceOption, ChoiceValue, DomainError, ItemText, SettingKey, SettingRegistry};
use crate::ports::TextResolver;

/// How a row's title and description are obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    /// Text ids looked up through the screen's resolver.
    Ids {
        title: String,
        description: Option<String>,
    },
    /// Text used as is.
    Literal(ItemText),
}

impl TextSource {
    pub fn ids(title: impl Into<String>, description: Option<&str>) -> Self {
        TextSource::Ids {
            title: title.into(),
            description: description.map(str::to_string),
        }
    }

    pub fn literal(title: impl Into<String>, description: impl Into<String>) -> Self {
        TextSource::Literal(ItemText::literal(title, description))
    }
}

impl From<ItemText> for TextSource {
    fn from(text: ItemText) -> Self {
        TextSource::Literal(text)
    }
}

/// Builds the ordered descriptor list of one settings screen.
///
/// Bindings are looked up in the registry by dotted key. An item whose
/// binding is missing or of the wrong type is skipped and kept in
/// [`SettingsScreen::rejected`]; the rest of the screen still builds.
pub struct ScreenBuilder<'a> {
    registry: &'a SettingRegistry,
    resolver: &'a dyn TextResolver,
    descriptors: Vec<SettingDescriptor>,
    rejected: Vec<DomainError>,
}

impl<'a> ScreenBuilder<'a> {
    pub fn new(registry: &'a SettingRegistry, resolver: &'a dyn TextResolver) -> Self {
        Self {
            registry,
            resolver,
            descriptors: Vec::new(),
            rejected: Vec::new(),
        }
    }

    #[must_use]
    pub fn check_box(self, key: &str, text: impl Into<TextSource>) -> Self {
        let text = self.resolve(text.into());
        let result = CheckBoxDescriptor::bind(self.registry.find(key), text);
        self.accept(key, result)
    }

    #[must_use]
    pub fn slider(self, key: &str, text: impl Into<TextSource>, range: SliderRange<i32>) -> Self {
        let text = self.resolve(text.into());
        let result = SliderDescriptor::bind(self.registry.find(key), text, range);
        self.accept(key, result)
    }

    #[must_use]
    pub fn float_slider(self, key: &str, text: impl Into<TextSource>, range: SliderRange<f32>) -> Self {
        let text = self.resolve(text.into());
        let result = FloatSliderDescriptor::bind(self.registry.find(key), text, range);
        self.accept(key, result)
    }

    #[must_use]
    pub fn input(self, key: &str, text: impl Into<TextSource>) -> Self {
        let text = self.resolve(text.into());
        let result = InputDescriptor::bind(self.registry.find(key), text);
        self.accept(key, result)
    }

    #[must_use]
    pub fn choice(self, key: &str, text: impl Into<TextSource>, options: Vec<ChoiceOption>) -> Self {
        let text = self.resolve(text.into());
        let result = ChoiceDescriptor::bind(self.registry.find(key), text, options);
        self.accept(key, result)
    }

    /// Like [`choice`](Self::choice), with option labels given as text ids.
    #[must_use]
    pub fn choice_ids<V>(self, key: &str, text: impl Into<TextSource>, options: &[(&str, V)]) -> Self
    where
        V: Clone + Into<ChoiceValue>,
    {
        let options = options
            .iter()
            .map(|(label_id, value)| ChoiceOption::resolved(self.resolver, label_id, value.clone()))
            .collect();
        self.choice(key, text, options)
    }

    /// Append an already built descriptor.
    #[must_use]
    pub fn push(mut self, descriptor: impl Into<SettingDescriptor>) -> Self {
        self.descriptors.push(descriptor.into());
        self
    }

    pub fn build(self) -> SettingsScreen {
        debug!(
            items = self.descriptors.len(),
            rejected = self.rejected.len(),
            "Settings screen built"
        );
        SettingsScreen {
            descriptors: self.descriptors,
            rejected: self.rejected,
        }
    }

    fn resolve(&self, text: TextSource) -> ItemText {
        match text {
            TextSource::Ids { title, description } => {
                ItemText::resolved(self.resolver, &title, description.as_deref())
            }
            TextSource::Literal(text) => text,
        }
    }

    fn accept<D: Into<SettingDescriptor>>(mut self, key: &str, result: Result<D, DomainError>) -> Self {
        match result {
            Ok(descriptor) => self.descriptors.push(descriptor.into()),
            Err(e) => {
                warn!(key = key, error = %e, "Skipping settings item");
                self.rejected.push(e);
            }
        }
        self
    }
}

/// The descriptors of one screen, in display order.
#[derive(Debug, Clone, Default)]
pub struct SettingsScreen {
    descriptors: Vec<SettingDescriptor>,
    rejected: Vec<DomainError>,
}

impl SettingsScreen {
    pub fn descriptors(&self) -> &[SettingDescriptor] {
        &self.descriptors
    }

    /// Binding errors for items that were left out.
    pub fn rejected(&self) -> &[DomainError] {
        &self.rejected
    }

    pub fn find(&self, key: &SettingKey) -> Option<&SettingDescriptor> {
        self.descriptors.iter().find(|d| d.key() == key)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn views(&self) -> Vec<DescriptorView> {
        self.descriptors.iter().map(|d| d.view()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{LayeredSnapshot, StringTableResolver};
    use crate::descriptors::ItemKind;
    use crate::domain::Setting;

    fn registry() -> SettingRegistry {
        SettingRegistry::new()
            .with(Setting::new(SettingKey::new("NetPlay", "UseUPNP"), false))
            .with(Setting::new(SettingKey::new("NetPlay", "BufferSize"), 8i32))
            .with(Setting::new(SettingKey::new("Core", "EmulationSpeed"), 1.0f32))
            .with(Setting::new(
                SettingKey::new("NetPlay", "TraversalServer"),
                "stun.dolphin-emu.org".to_string(),
            ))
            .with(Setting::new(
                SettingKey::new("NetPlay", "NetworkMode"),
                ChoiceValue::from("golf"),
            ))
    }

    fn resolver() -> StringTableResolver {
        StringTableResolver::from_pairs([
            ("upnp", "Use UPnP"),
            ("upnp_desc", "Forward ports automatically."),
            ("mode_fair", "Fair Input Delay"),
            ("mode_golf", "Golf Mode"),
        ])
    }

    #[test]
    fn test_builder_keeps_order_and_kinds() {
        let registry = registry();
        let resolver = resolver();
        let screen = ScreenBuilder::new(&registry, &resolver)
            .check_box("NetPlay.UseUPNP", TextSource::ids("upnp", Some("upnp_desc")))
            .slider("NetPlay.BufferSize", TextSource::literal("Pad Buffer", ""), SliderRange::new(0, 64, 1))
            .float_slider(
                "Core.EmulationSpeed",
                TextSource::literal("Speed", ""),
                SliderRange::new(0.0, 2.0, 0.1),
            )
            .input("NetPlay.TraversalServer", TextSource::literal("Traversal Server", ""))
            .choice_ids(
                "NetPlay.NetworkMode",
                TextSource::literal("Network Mode", ""),
                &[("mode_fair", "fixeddelay"), ("mode_golf", "golf")],
            )
            .build();

        assert!(screen.rejected().is_empty());
        let kinds: Vec<_> = screen.descriptors().iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ItemKind::CheckBox,
                ItemKind::Slider,
                ItemKind::FloatSlider,
                ItemKind::Input,
                ItemKind::SingleChoice,
            ]
        );

        let upnp = &screen.descriptors()[0];
        assert_eq!(upnp.title(), "Use UPnP");
        assert_eq!(upnp.description(), "Forward ports automatically.");

        let mode = screen.descriptors()[4].as_choice().unwrap();
        assert_eq!(mode.options()[1], ChoiceOption::literal("Golf Mode", "golf"));
    }

    #[test]
    fn test_builder_skips_invalid_bindings() {
        let registry = registry();
        let resolver = resolver();
        let screen = ScreenBuilder::new(&registry, &resolver)
            .check_box("NetPlay.Unknown", TextSource::literal("Unknown", ""))
            .check_box("NetPlay.BufferSize", TextSource::literal("Wrong Type", ""))
            .check_box("NetPlay.UseUPNP", TextSource::literal("Use UPnP", ""))
            .build();

        assert_eq!(screen.len(), 1);
        assert_eq!(screen.rejected().len(), 2);
        assert!(screen
            .rejected()
            .iter()
            .all(|e| matches!(e, DomainError::InvalidBinding { .. })));
    }

    #[test]
    fn test_literal_and_ids_build_equal_descriptors() {
        let registry = registry();
        let resolver = resolver();
        let screen = ScreenBuilder::new(&registry, &resolver)
            .check_box("NetPlay.UseUPNP", TextSource::ids("upnp", Some("upnp_desc")))
            .check_box(
                "NetPlay.UseUPNP",
                ItemText::literal("Use UPnP", "Forward ports automatically."),
            )
            .build();

        assert_eq!(screen.descriptors()[0], screen.descriptors()[1]);
    }

    #[test]
    fn test_screen_edit_flow() {
        let registry = registry();
        let resolver = resolver();
        let screen = ScreenBuilder::new(&registry, &resolver)
            .check_box("NetPlay.UseUPNP", TextSource::literal("Use UPnP", ""))
            .build();
        let mut snapshot = LayeredSnapshot::global().with_defaults(&registry);

        let key = SettingKey::new("NetPlay", "UseUPNP");
        let check_box = screen.find(&key).and_then(|d| d.as_check_box()).unwrap();
        assert!(!check_box.is_checked(&snapshot).unwrap());

        check_box.set_checked(&mut snapshot, true);
        assert!(check_box.is_checked(&snapshot).unwrap());
        assert_eq!(snapshot.take_changes().len(), 1);
    }

    #[test]
    fn test_push_and_views() {
        let registry = SettingRegistry::new();
        let resolver = resolver();
        let screen = ScreenBuilder::new(&registry, &resolver)
            .push(
                SliderDescriptor::new(
                    Setting::new(SettingKey::new("Audio", "Volume"), 100),
                    ItemText::literal("Volume", ""),
                    SliderRange::new(0, 100, 1),
                )
                .with_units("%"),
            )
            .build();

        let views = screen.views();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].key, "Audio.Volume");
        assert!(!screen.is_empty());
    }
}
