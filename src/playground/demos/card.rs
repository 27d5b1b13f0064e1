use crate::components::composite::card::{CardOrientation, CardProps, CardSize, CardVariant};
use crate::components::primitives::button::{ButtonProps, ButtonSize, ButtonVariant};
use crate::playground::demo_element::DemoElement;
use crate::playground::types::{
    AdvancedExample, ComponentConfig, ComponentDocumentation, ComponentExample, ComponentProp,
    Usage,
};

use super::INSTALLATION;

const SAMPLE_CONTENT: &str = "This is a sample card content that demonstrates how the card \
    component works with different configurations and layouts.";

const LONG_CONTENT: &str = "This is a longer content example that shows how the card component \
    handles more extensive text content. It includes multiple sentences to demonstrate proper \
    text flow and spacing within the card layout.";

fn small(label: &'static str, variant: ButtonVariant) -> DemoElement {
    DemoElement::button(
        ButtonProps::new(label)
            .variant(variant)
            .size(ButtonSize::Small),
    )
}

fn sample_actions() -> DemoElement {
    DemoElement::row([
        DemoElement::button(
            ButtonProps::new("Like")
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Small)
                .start_icon("❤"),
        ),
        DemoElement::button(
            ButtonProps::new("Share")
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Small)
                .start_icon("📤"),
        ),
        small("Connect", ButtonVariant::Primary),
    ])
}

fn outlined(title: &'static str) -> CardProps {
    CardProps::new().title(title).variant(CardVariant::Outlined)
}

pub fn config() -> ComponentConfig {
    ComponentConfig::new(
        "Card",
        "A flexible content container component with configurable layouts, visual variants, and \
         interactive states.",
        "Layout",
    )
    .example(
        ComponentExample::new(
            "Basic Card",
            DemoElement::card(
                CardProps::new().title("Basic Card").subtitle("Simple example"),
                SAMPLE_CONTENT,
            ),
        )
        .description("Simple card with title and content"),
    )
    .example(
        ComponentExample::new(
            "Visual Variants",
            DemoElement::row([
                DemoElement::card(
                    CardProps::new()
                        .variant(CardVariant::Flat)
                        .title("Flat Card")
                        .size(CardSize::Compact),
                    "Minimal styling with no borders or shadows.",
                ),
                DemoElement::card(
                    outlined("Outlined Card").size(CardSize::Compact),
                    "Clean border with no shadow elevation.",
                ),
                DemoElement::card(
                    CardProps::new()
                        .variant(CardVariant::Elevated)
                        .title("Elevated Card")
                        .size(CardSize::Compact),
                    "Subtle shadow for depth and prominence.",
                ),
                DemoElement::card(
                    CardProps::new()
                        .variant(CardVariant::Subtle)
                        .title("Subtle Card")
                        .size(CardSize::Compact),
                    "Light background with minimal shadow.",
                ),
            ]),
        )
        .description("Different visual styles: flat, outlined, elevated, and subtle"),
    )
    .example(
        ComponentExample::new(
            "Size Variations",
            DemoElement::row([
                DemoElement::card(
                    outlined("Compact").size(CardSize::Compact),
                    "Minimal padding for tight layouts.",
                ),
                DemoElement::card(
                    outlined("Comfortable").size(CardSize::Comfortable),
                    "Balanced padding for most use cases.",
                ),
                DemoElement::card(
                    outlined("Spacious").size(CardSize::Spacious),
                    "Generous padding for emphasis.",
                ),
            ]),
        )
        .description("Different padding sizes: compact, comfortable, and spacious"),
    )
    .example(
        ComponentExample::new(
            "Interactive Card",
            DemoElement::row([
                DemoElement::card(
                    outlined("Clickable Card")
                        .subtitle("Click to interact")
                        .clickable(true),
                    "This card responds to clicks and keyboard interactions.",
                ),
                DemoElement::card(
                    outlined("Selected Card")
                        .subtitle("Currently selected")
                        .clickable(true)
                        .selected(true),
                    "This card shows the selected state styling.",
                ),
                DemoElement::card(
                    outlined("Disabled Card")
                        .subtitle("Cannot interact")
                        .clickable(true)
                        .disabled(true),
                    "This card is disabled and cannot be clicked.",
                ),
            ]),
        )
        .description("Clickable cards with hover effects and selection states"),
    )
    .example(
        ComponentExample::new(
            "Cards with Images",
            DemoElement::row([
                DemoElement::card(
                    CardProps::new()
                        .image("https://images.unsplash.com/photo-1557804506-669a67965ba0?w=400&h=225&fit=crop")
                        .image_alt("Office workspace")
                        .title("Project Update")
                        .subtitle("Development Team")
                        .variant(CardVariant::Elevated),
                    "Our latest project milestone has been completed ahead of schedule with \
                     excellent results.",
                )
                .with_footer(sample_actions()),
                DemoElement::card(
                    outlined("User Profile").subtitle("Software Engineer"),
                    "Passionate developer with expertise in Rust and GPUI.",
                )
                .with_media(DemoElement::tile("👤"))
                .with_footer(DemoElement::row([
                    small("View Profile", ButtonVariant::Ghost),
                    small("Follow", ButtonVariant::Primary),
                ])),
            ]),
        )
        .description("Cards featuring images and media content"),
    )
    .example(
        ComponentExample::new(
            "Horizontal Layout",
            DemoElement::stack([
                DemoElement::card(
                    outlined("Horizontal Card")
                        .subtitle("Side-by-side layout")
                        .orientation(CardOrientation::Horizontal)
                        .image("https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=400&h=225&fit=crop")
                        .image_alt("Technology"),
                    "This card demonstrates the horizontal layout option where the image \
                     appears on the left side and content flows alongside it.",
                )
                .with_footer(DemoElement::row([
                    DemoElement::button(
                        ButtonProps::new("Settings")
                            .variant(ButtonVariant::Ghost)
                            .size(ButtonSize::Small)
                            .start_icon("⚙"),
                    ),
                    small("Edit", ButtonVariant::Secondary),
                ])),
                DemoElement::card(
                    CardProps::new()
                        .title("Analytics Dashboard")
                        .subtitle("Data insights")
                        .variant(CardVariant::Elevated)
                        .orientation(CardOrientation::Horizontal)
                        .clickable(true),
                    "View comprehensive analytics and insights for your projects with detailed \
                     metrics and performance data.",
                )
                .with_media(DemoElement::tile("📊")),
            ]),
        )
        .description("Cards with horizontal orientation for different layouts"),
    )
    .example(
        ComponentExample::new(
            "Loading and States",
            DemoElement::row([
                DemoElement::card(
                    outlined("Loading Card")
                        .subtitle("Please wait...")
                        .loading(true),
                    LONG_CONTENT,
                ),
                DemoElement::card(
                    CardProps::new()
                        .title("Rich Content Card")
                        .subtitle("Complex layout example")
                        .variant(CardVariant::Elevated)
                        .size(CardSize::Spacious),
                    "This card demonstrates rich content with multiple paragraphs and complex \
                     footer layouts.",
                )
                .with_body(DemoElement::stack([
                    DemoElement::text("• Feature-rich content support"),
                    DemoElement::text("• Flexible footer layouts"),
                    DemoElement::text("• Professional styling"),
                ]))
                .with_footer(DemoElement::text("Updated 2 hours ago"))
                .with_footer(sample_actions()),
            ]),
        )
        .description("Cards with loading states and different configurations"),
    )
    .documentation(documentation())
}

fn documentation() -> ComponentDocumentation {
    let text = "impl Into<SharedString>";
    ComponentDocumentation {
        description: "A flexible and accessible card component that serves as a content \
            container. Perfect for displaying structured information, user profiles, product \
            listings, and interactive content with consistent styling and behavior."
            .into(),
        props: vec![
            ComponentProp::new("title", text, "Header title text"),
            ComponentProp::new("subtitle", text, "Header subtitle displayed below the title"),
            ComponentProp::new("child", "impl IntoElement", "Main card content; call repeatedly to add children"),
            ComponentProp::new(
                "footer",
                "impl IntoElement",
                "Footer content area, typically used for actions or metadata",
            ),
            ComponentProp::new("image", text, "Image path or URL for the media section"),
            ComponentProp::new("media", "impl IntoElement", "Custom media element used instead of an image"),
            ComponentProp::new("image_alt", text, "Text shown when the image cannot be loaded")
                .default_value("title or \"Card image\""),
            ComponentProp::new(
                "variant",
                "CardVariant::{Flat, Outlined, Elevated, Subtle}",
                "Visual style variant; affects borders, shadows, and background",
            )
            .default_value("CardVariant::Outlined"),
            ComponentProp::new(
                "size",
                "CardSize::{Compact, Comfortable, Spacious}",
                "Padding size variant for different content densities",
            )
            .default_value("CardSize::Comfortable"),
            ComponentProp::new(
                "orientation",
                "CardOrientation::{Vertical, Horizontal}",
                "Vertical stacks content; horizontal places media beside content",
            )
            .default_value("CardOrientation::Vertical"),
            ComponentProp::new(
                "clickable",
                "bool",
                "Makes the entire card interactive with hover effects and keyboard support",
            )
            .default_value("false"),
            ComponentProp::new(
                "selected",
                "bool",
                "Shows selected state styling (requires clickable to be meaningful)",
            )
            .default_value("false"),
            ComponentProp::new(
                "loading",
                "bool",
                "Shows loading spinner overlay and disables interactions",
            )
            .default_value("false"),
            ComponentProp::new("disabled", "bool", "Disables interactions and applies disabled styling")
                .default_value("false"),
            ComponentProp::new(
                "on_click",
                "Fn(&mut Window, &mut App)",
                "Activation handler for pointer clicks and Enter/Space (requires clickable)",
            ),
            ComponentProp::new(
                "on_key_down",
                "Fn(&KeyDownEvent, &mut Window, &mut App)",
                "Custom keyboard handler, skipped while disabled or loading",
            ),
            ComponentProp::new(
                "focus_handle",
                "FocusHandle",
                "External focus handle; clickable cards create their own otherwise",
            ),
            ComponentProp::new("width", "f32", "Fixed width in pixels"),
            ComponentProp::new("role", text, "Accessibility role")
                .default_value("\"button\" (if clickable)"),
            ComponentProp::new("aria_label", text, "Accessibility label for assistive technology"),
            ComponentProp::new("class_name", text, "Additional class token resolved against the style sheet"),
        ],
        usage: Usage {
            installation: Some(INSTALLATION.to_string()),
            basic_example: r#"use akgui::Card;

Card::new("welcome")
    .title("Welcome")
    .subtitle("Get started")
    .child("This is a basic card with title and content.")"#
                .to_string(),
            advanced_examples: vec![
                AdvancedExample::new(
                    "Interactive Content Card",
                    r#"fn product_card(product: &Product) -> Card {
    Card::new(product.id.clone())
        .image(product.image_url.clone())
        .image_alt(product.name.clone())
        .title(product.name.clone())
        .subtitle(format!("${:.2}", product.price))
        .variant(CardVariant::Elevated)
        .clickable(true)
        .on_click(|_window, _cx| tracing::info!("view details"))
        .child(product.description.clone())
        .footer(Button::ghost("details", "View Details"))
        .footer(Button::new("add", "Add to Cart"))
}"#,
                )
                .description("Card with image, actions, and click handling"),
                AdvancedExample::new(
                    "Profile Card with Custom Styling",
                    r#"Card::new("profile")
    .variant(CardVariant::Subtle)
    .size(CardSize::Spacious)
    .class_name("user-profile-card")
    .child(
        div()
            .flex()
            .flex_col()
            .items_center()
            .child(img(user.avatar.clone()).size_20().rounded_full())
            .child(user.name.clone())
            .child(user.bio.clone()),
    )
    .footer(
        Button::new("connect", if connected { "Connected" } else { "Connect" })
            .variant(if connected { ButtonVariant::Secondary } else { ButtonVariant::Primary })
            .full_width(true),
    )"#,
                )
                .description("User profile card with custom layout and styling"),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_titles() {
        let titles: Vec<_> = config().examples.iter().map(|e| e.title.to_string()).collect();
        assert_eq!(
            titles,
            vec![
                "Basic Card",
                "Visual Variants",
                "Size Variations",
                "Interactive Card",
                "Cards with Images",
                "Horizontal Layout",
                "Loading and States",
            ]
        );
    }

    #[test]
    fn interactive_example_has_three_clickable_cards() {
        let config = config();
        let interactive = config
            .examples
            .iter()
            .find(|e| e.title.as_str() == "Interactive Card")
            .map(|e| {
                let mut count = 0;
                e.component.walk(&mut |element| {
                    if let DemoElement::Card { props, .. } = element {
                        count += usize::from(props.clickable);
                    }
                });
                count
            });
        assert_eq!(interactive, Some(3));
    }

    #[test]
    fn basic_card_code_is_generated() {
        let config = config();
        let code = &config.examples[0].code;
        assert!(code.starts_with("Card::new(\"basic-card\")"));
        assert!(code.contains(".subtitle(\"Simple example\")"));
    }
}
