use super::*;

/// Props of an [`Input`] gathered into one record.
#[derive(Clone, Default)]
pub struct InputConfig {
    /// Native `type` attribute.
    pub input_type: InputType,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Label rendered above the control.
    pub label: Option<String>,
    /// Externally owned value of the control; a signal keeps the mounted control in sync.
    pub value: MaybeSignal<String>,
    /// Sizing token.
    pub size: InputSize,
    /// Visual style.
    pub variant: InputVariant,
    /// Forwarded as the native `disabled` attribute.
    pub disabled: MaybeSignal<bool>,
    /// Marks the control and helper text as invalid.
    pub error: bool,
    /// Helper or error copy rendered below the control.
    pub helper_text: Option<String>,
    /// Receives the new value on every edit.
    pub on_change: Option<Callback<String>>,
}

/// Helper text block of a rendered input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHelper {
    /// Helper class list.
    pub class: String,
    /// Helper copy.
    pub text: String,
}

/// Node plan for one input render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMarkup {
    /// Control class list.
    pub class: String,
    /// Label text.
    pub label: Option<String>,
    /// Helper block.
    pub helper: Option<InputHelper>,
    /// Value of the `type` attribute.
    pub input_type: &'static str,
    /// Placeholder attribute.
    pub placeholder: String,
    /// Displayed value.
    pub value: String,
    /// Native disabled flag.
    pub disabled: bool,
}

impl InputConfig {
    /// Control class list: base, size, variant, then error and disabled markers.
    ///
    /// Reads the current `disabled` state without tracking it.
    pub fn class_name(&self) -> String {
        self.class_name_for(self.disabled.get_untracked())
    }

    fn class_name_for(&self, disabled: bool) -> String {
        compose_classes([
            (true, "storybook-input".to_string()),
            (true, format!("storybook-input--{}", self.size.token())),
            (true, format!("storybook-input--{}", self.variant.token())),
            (self.error, "storybook-input--error".to_string()),
            (disabled, "storybook-input--disabled".to_string()),
        ])
    }

    /// Helper block class list, independent of the control's own classes.
    pub fn helper_class_name(&self) -> String {
        compose_classes([
            (true, "storybook-input__helper"),
            (self.error, "storybook-input__helper--error"),
        ])
    }

    /// Computes the node plan rendered by [`Input`] from the current value and
    /// disabled state.
    pub fn markup(&self) -> InputMarkup {
        InputMarkup {
            class: self.class_name(),
            label: self.label.clone(),
            helper: self.helper_text.as_ref().map(|text| InputHelper {
                class: self.helper_class_name(),
                text: text.clone(),
            }),
            input_type: self.input_type.token(),
            placeholder: self.placeholder.clone(),
            value: self.value.get_untracked(),
            disabled: self.disabled.get_untracked(),
        }
    }
}

fn render_input(config: InputConfig, attrs: Vec<(&'static str, Attribute)>) -> impl IntoView {
    let InputMarkup {
        label,
        helper,
        input_type,
        placeholder,
        ..
    } = config.markup();
    let InputConfig {
        value,
        disabled,
        on_change,
        ..
    } = config.clone();
    let class = move || config.class_name_for(disabled.get());

    view! {
        <div class="storybook-input-wrapper" data-ui-primitive="true" data-ui-kind="input">
            {label.map(|label| view! { <label class="storybook-input__label">{label}</label> })}
            <input
                type=input_type
                class=class
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-disabled=move || bool_token(disabled.get())
                on:input=move |ev| notify(on_change.as_ref(), event_target_value(&ev))
                {..attrs}
            />
            {helper.map(|helper| view! { <div class=helper.class>{helper.text}</div> })}
        </div>
    }
}

impl IntoView for InputConfig {
    fn into_view(self) -> View {
        render_input(self, Vec::new()).into_view()
    }
}

#[component]
/// Controlled form input with an optional label and helper text.
///
/// The displayed value always comes from `value`; edits are reported through
/// `on_change` and never stored here. Pass a signal as `value` (or `disabled`)
/// to drive the mounted control without rebuilding it. Attributes not named here are spread
/// onto the `input` control.
pub fn Input(
    #[prop(default = InputType::Text)] input_type: InputType,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(default = InputSize::Medium)] size: InputSize,
    #[prop(default = InputVariant::Outlined)] variant: InputVariant,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] error: bool,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    render_input(
        InputConfig {
            input_type,
            placeholder,
            label,
            value,
            size,
            variant,
            disabled,
            error,
            helper_text,
            on_change,
        },
        attrs,
    )
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use leptos::ssr::render_to_string;

    use super::*;

    fn open_tag<'a>(html: &'a str, marker: &str) -> &'a str {
        let start = html
            .find(marker)
            .unwrap_or_else(|| panic!("`{marker}` missing from {html}"));
        let end = html[start..].find('>').map_or(html.len(), |end| start + end);
        &html[start..end]
    }

    fn has_attribute(tag: &str, name: &str) -> bool {
        tag.split_whitespace()
            .any(|part| part == name || part.starts_with(&format!("{name}=")))
    }

    #[test]
    fn labelled_error_input_renders_label_control_and_helper() {
        let html = render_to_string(|| {
            view! {
                <Input
                    label="Email"
                    error=true
                    helper_text="bad"
                    disabled=true
                    attr:name="n"
                />
            }
        })
        .to_string();

        assert!(html.contains(r#"class="storybook-input__label""#), "{html}");
        assert!(html.contains(">Email</label>"), "{html}");
        assert!(
            html.contains(r#"class="storybook-input__helper storybook-input__helper--error""#),
            "{html}"
        );

        let control = open_tag(&html, "<input");
        assert!(control.contains(r#"name="n""#), "{control}");
        assert!(has_attribute(control, "disabled"), "{control}");
        assert!(control.contains("storybook-input--error storybook-input--disabled"));
    }

    #[test]
    fn plain_input_omits_label_helper_and_disabled() {
        let html = render_to_string(|| {
            view! { <Input placeholder="Enter text here..." attr:id="plain" /> }
        })
        .to_string();

        assert!(!html.contains("storybook-input__label"), "{html}");
        assert!(!html.contains("storybook-input__helper"), "{html}");

        let control = open_tag(&html, "<input");
        assert!(control.contains(r#"id="plain""#), "{control}");
        assert!(control.contains(r#"type="text""#), "{control}");
        assert!(control.contains(r#"placeholder="Enter text here...""#), "{control}");
        assert!(!has_attribute(control, "disabled"), "{control}");
    }

    #[test]
    fn helper_without_error_renders_plain_helper_class() {
        let html = render_to_string(|| {
            view! { <Input helper_text="Username must be at least 3 characters long" /> }
        })
        .to_string();

        assert!(html.contains(r#"class="storybook-input__helper""#), "{html}");
        assert!(!html.contains("storybook-input__helper--error"), "{html}");
    }
}
