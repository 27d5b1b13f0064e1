use crate::components::primitives::button::{ButtonProps, ButtonSize, ButtonVariant};
use crate::playground::demo_element::DemoElement;
use crate::playground::types::{
    AdvancedExample, ComponentConfig, ComponentDocumentation, ComponentExample, ComponentProp,
    Usage,
};

use super::INSTALLATION;

fn button(label: &str) -> ButtonProps {
    ButtonProps::new(label.to_string())
}

pub fn config() -> ComponentConfig {
    ComponentConfig::new(
        "Button",
        "A versatile button component that supports different variants, sizes, and states.",
        "General",
    )
    .example(ComponentExample::new(
        "Default",
        DemoElement::button(button("Click me")),
    ))
    .example(ComponentExample::new(
        "Variants",
        DemoElement::row(
            ButtonVariant::all()
                .iter()
                .map(|variant| DemoElement::button(button(&format!("{variant:?}")).variant(*variant))),
        ),
    ))
    .example(ComponentExample::new(
        "Sizes",
        DemoElement::row(
            ButtonSize::all()
                .iter()
                .map(|size| DemoElement::button(button(&format!("{size:?}")).size(*size))),
        ),
    ))
    .example(ComponentExample::new(
        "States",
        DemoElement::row([
            DemoElement::button(button("Normal")),
            DemoElement::button(button("Disabled").disabled(true)),
            DemoElement::button(button("Loading").loading(true)),
        ]),
    ))
    .example(ComponentExample::new(
        "With Icons",
        DemoElement::row([
            DemoElement::button(button("Start Icon").start_icon("⚡")),
            DemoElement::button(button("End Icon").end_icon("→")),
            DemoElement::button(
                button("Fire")
                    .start_icon("🔥")
                    .variant(ButtonVariant::Secondary),
            ),
        ]),
    ))
    .example(ComponentExample::new(
        "Full Width",
        DemoElement::button(button("Full Width Button").full_width(true)),
    ))
    .documentation(documentation())
}

fn documentation() -> ComponentDocumentation {
    ComponentDocumentation {
        description: "The Button component is a foundational UI element that handles user \
            interactions. It provides a consistent interface for triggering actions, submitting \
            forms, and navigation throughout your application."
            .into(),
        props: vec![
            ComponentProp::new("label", "impl Into<SharedString>", "The text displayed inside the button")
                .required(),
            ComponentProp::new(
                "variant",
                "ButtonVariant::{Primary, Secondary, Ghost, Danger}",
                "The visual style variant of the button",
            )
            .default_value("ButtonVariant::Primary"),
            ComponentProp::new(
                "size",
                "ButtonSize::{Small, Medium, Large}",
                "The size of the button",
            )
            .default_value("ButtonSize::Medium"),
            ComponentProp::new(
                "disabled",
                "bool",
                "Whether the button is disabled and cannot be interacted with",
            )
            .default_value("false"),
            ComponentProp::new(
                "loading",
                "bool",
                "Whether the button is in a loading state with a spinner",
            )
            .default_value("false"),
            ComponentProp::new(
                "start_icon",
                "impl Into<SharedString>",
                "Optional icon to display before the button text",
            ),
            ComponentProp::new(
                "end_icon",
                "impl Into<SharedString>",
                "Optional icon to display after the button text",
            ),
            ComponentProp::new(
                "full_width",
                "bool",
                "Whether the button should take the full width of its container",
            )
            .default_value("false"),
            ComponentProp::new(
                "on_click",
                "Fn(&ClickEvent, &mut Window, &mut App)",
                "Called when the button is clicked; never fires while disabled or loading",
            ),
            ComponentProp::new(
                "class_name",
                "impl Into<SharedString>",
                "Additional class token resolved against the style sheet",
            ),
        ],
        usage: Usage {
            installation: Some(INSTALLATION.to_string()),
            basic_example: r#"use akgui::Button;

Button::new("save", "Click me")
    .on_click(|_event, _window, _cx| {
        tracing::info!("Clicked!");
    })"#
            .to_string(),
            advanced_examples: vec![
                AdvancedExample::new(
                    "Form Submission",
                    r#"struct ContactForm {
    submitting: bool,
}

impl Render for ContactForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let label = if self.submitting { "Submitting..." } else { "Submit" };

        Button::new("submit", label)
            .loading(self.submitting)
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.submitting = true;
                cx.notify();
            }))
    }
}"#,
                )
                .description("Using the Button component for form submissions with loading states"),
                AdvancedExample::new(
                    "Button Group",
                    r#"div()
    .flex()
    .gap_2()
    .child(Button::new("save", "Save"))
    .child(Button::secondary("cancel", "Cancel"))
    .child(Button::danger("delete", "Delete").size(ButtonSize::Small))"#,
                )
                .description("Creating a group of related buttons with consistent styling"),
                AdvancedExample::new(
                    "Icon Buttons",
                    r#"div()
    .flex()
    .gap_4()
    .child(Button::ghost("back", "Back").start_icon("←"))
    .child(Button::new("continue", "Continue").end_icon("→"))
    .child(Button::new("save", "Save Changes").start_icon("💾"))"#,
                )
                .description("Using buttons with icons for better visual hierarchy"),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples_cover_every_variant_and_size() {
        let config = config();
        let titles: Vec<_> = config.examples.iter().map(|e| e.title.to_string()).collect();
        assert_eq!(
            titles,
            vec!["Default", "Variants", "Sizes", "States", "With Icons", "Full Width"]
        );

        let variants = &config.examples[1].code;
        for variant in ["Secondary", "Ghost", "Danger"] {
            assert!(variants.contains(&format!("ButtonVariant::{variant}")));
        }
        assert!(!variants.contains("ButtonVariant::Primary"));
    }

    #[test]
    fn label_is_the_only_required_prop() {
        let config = config();
        let required: Vec<_> = config
            .documentation
            .iter()
            .flat_map(|doc| doc.props.iter())
            .filter(|prop| prop.required)
            .map(|prop| prop.name.to_string())
            .collect();
        assert_eq!(required, vec!["label"]);
    }
}
