use crate::components::layout::app_bar::{
    ActionButton, AppBarLogo, AppBarPosition, AppBarProps, AppBarVariant, MenuItem,
};
use crate::components::primitives::button::ButtonVariant;
use crate::playground::demo_element::DemoElement;
use crate::playground::types::{
    AdvancedExample, ComponentConfig, ComponentDocumentation, ComponentExample, ComponentProp,
    Usage,
};

use super::INSTALLATION;

fn sample_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("home", "Home"),
        MenuItem::new("products", "Products"),
        MenuItem::new("about", "About"),
        MenuItem::new("contact", "Contact"),
    ]
}

fn sample_actions() -> Vec<ActionButton> {
    vec![
        ActionButton::new("login", "Login"),
        ActionButton::new("signup", "Sign Up").variant(ButtonVariant::Primary),
    ]
}

fn logo() -> AppBarLogo {
    AppBarLogo::Glyph("A".into())
}

fn branded(title: &'static str) -> AppBarProps {
    AppBarProps::new().logo(logo()).title(title)
}

pub fn config() -> ComponentConfig {
    ComponentConfig::new(
        "AppBar",
        "A flexible navigation bar component with responsive design, customizable branding, \
         menu items, and action buttons.",
        "Navigation",
    )
    .example(
        ComponentExample::new(
            "Basic AppBar",
            DemoElement::app_bar(
                AppBarProps::new()
                    .title("AKGUI")
                    .menu_items(sample_menu_items())
                    .active_item("home"),
            ),
        )
        .description("Simple app bar with title and navigation menu"),
    )
    .example(
        ComponentExample::new(
            "With Logo and Actions",
            DemoElement::app_bar(
                branded("AKGUI")
                    .menu_items(sample_menu_items())
                    .actions(sample_actions())
                    .active_item("products"),
            ),
        )
        .description("App bar with custom logo and action buttons"),
    )
    .example(
        ComponentExample::new(
            "Elevated Variant",
            DemoElement::app_bar(
                branded("AKGUI")
                    .menu_items(sample_menu_items())
                    .actions(sample_actions())
                    .variant(AppBarVariant::Elevated)
                    .active_item("about"),
            ),
        )
        .description("App bar with elevated styling (shadow effect)"),
    )
    .example(
        ComponentExample::new(
            "Sticky Positioning",
            DemoElement::stack([
                DemoElement::app_bar(
                    branded("Sticky Header")
                        .menu_items([
                            MenuItem::new("dashboard", "Dashboard"),
                            MenuItem::new("analytics", "Analytics"),
                            MenuItem::new("settings", "Settings"),
                        ])
                        .actions([ActionButton::new("profile", "Profile").icon("👤")])
                        .position(AppBarPosition::Sticky)
                        .variant(AppBarVariant::Elevated)
                        .active_item("dashboard"),
                ),
                DemoElement::text(
                    "This content is scrollable. The app bar will stick to the top of the \
                     container when you scroll.",
                ),
            ]),
        )
        .description("App bar that sticks to the top when scrolling"),
    )
    .example(
        ComponentExample::new(
            "With Icons in Actions",
            DemoElement::app_bar(
                branded("AKGUI")
                    .menu_items([
                        MenuItem::new("home", "Home"),
                        MenuItem::new("dashboard", "Dashboard"),
                    ])
                    .actions([
                        ActionButton::new("settings", "Settings").icon("⚙"),
                        ActionButton::new("profile", "Profile")
                            .variant(ButtonVariant::Primary)
                            .icon("👤"),
                    ])
                    .active_item("dashboard"),
            ),
        )
        .description("Action buttons with icons for better UX"),
    )
    .example(
        ComponentExample::new(
            "Minimal Brand Only",
            DemoElement::app_bar(branded("Brand").actions([
                ActionButton::new("login", "Login"),
                ActionButton::new("signup", "Get Started").variant(ButtonVariant::Primary),
            ])),
        )
        .description("Simple app bar with only branding and actions"),
    )
    .documentation(documentation())
}

fn documentation() -> ComponentDocumentation {
    ComponentDocumentation {
        description: "A comprehensive navigation bar component designed for modern \
            applications. Features responsive design, flexible positioning, customizable \
            branding, and intuitive mobile experience."
            .into(),
        props: vec![
            ComponentProp::new(
                "logo",
                "AppBarLogo::{Image, Glyph}",
                "Logo image source or text badge displayed in the brand section",
            ),
            ComponentProp::new(
                "title",
                "impl Into<SharedString>",
                "Brand or application title displayed next to the logo",
            ),
            ComponentProp::new(
                "menu_items",
                "impl IntoIterator<Item = MenuItem>",
                "Navigation menu items with labels, links, and states",
            )
            .default_value("[]"),
            ComponentProp::new(
                "active_item",
                "impl Into<SharedString>",
                "ID of the currently active menu item (highlighted)",
            ),
            ComponentProp::new(
                "actions",
                "impl IntoIterator<Item = ActionButton>",
                "Action buttons (login, signup, profile) displayed on the right",
            )
            .default_value("[]"),
            ComponentProp::new(
                "position",
                "AppBarPosition::{Static, Sticky, Fixed}",
                "Positioning behavior of the app bar",
            )
            .default_value("AppBarPosition::Static"),
            ComponentProp::new(
                "variant",
                "AppBarVariant::{Default, Elevated}",
                "Visual style variant: default with border or elevated with shadow",
            )
            .default_value("AppBarVariant::Default"),
            ComponentProp::new(
                "breakpoint",
                "f32",
                "Window width in pixels below which the mobile layout is activated",
            )
            .default_value("768.0"),
            ComponentProp::new(
                "class_name",
                "impl Into<SharedString>",
                "Additional class token resolved against the style sheet",
            ),
            ComponentProp::new(
                "AppBarEvent::BrandClicked",
                "event",
                "Emitted when the brand section (logo or title) is clicked",
            ),
            ComponentProp::new(
                "AppBarEvent::MenuItemSelected",
                "event",
                "Emitted with the item id and href when an enabled menu item is clicked",
            ),
            ComponentProp::new(
                "AppBarEvent::ActionClicked",
                "event",
                "Emitted with the action id when an action button is clicked",
            ),
        ],
        usage: Usage {
            installation: Some(INSTALLATION.to_string()),
            basic_example: r#"use akgui::{AppBar, AppBarProps, MenuItem};

let app_bar = cx.new(|cx| {
    AppBar::new(
        AppBarProps::new()
            .title("My App")
            .menu_items([
                MenuItem::new("home", "Home"),
                MenuItem::new("about", "About"),
            ])
            .active_item("home"),
        &viewport,
        cx,
    )
});"#
                .to_string(),
            advanced_examples: vec![
                AdvancedExample::new(
                    "With Custom Logo and Event Handlers",
                    r#"let app_bar = cx.new(|cx| {
    AppBar::new(
        AppBarProps::new()
            .logo(AppBarLogo::Image("icons/logo.svg".into()))
            .title("AKGUI")
            .menu_items([
                MenuItem::new("home", "Home"),
                MenuItem::new("docs", "Docs").href("/docs"),
            ])
            .actions([
                ActionButton::new("login", "Login"),
                ActionButton::new("signup", "Sign Up").variant(ButtonVariant::Primary),
            ])
            .position(AppBarPosition::Sticky)
            .variant(AppBarVariant::Elevated),
        &viewport,
        cx,
    )
});

cx.subscribe(&app_bar, |this, app_bar, event: &AppBarEvent, cx| match event {
    AppBarEvent::BrandClicked => this.go_home(cx),
    AppBarEvent::MenuItemSelected { id, .. } => {
        app_bar.update(cx, |bar, cx| bar.set_active_item(Some(id.clone()), cx));
    }
    AppBarEvent::ActionClicked { id } => tracing::info!(%id, "action"),
})
.detach();"#,
                )
                .description("Complete setup with logo, navigation, and event handling"),
                AdvancedExample::new(
                    "Responsive Configuration",
                    r#"AppBarProps::new()
    .title("Responsive App")
    .menu_items(menu_items)
    .breakpoint(900.0)
    .position(AppBarPosition::Fixed)
    .class_name("custom-header")"#,
                )
                .description("Custom mobile breakpoint and responsive behavior"),
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
                "Basic AppBar",
                "With Logo and Actions",
                "Elevated Variant",
                "Sticky Positioning",
                "With Icons in Actions",
                "Minimal Brand Only",
            ]
        );
    }

    #[test]
    fn every_example_has_one_app_bar() {
        for example in config().examples {
            assert_eq!(example.component.app_bars().len(), 1, "{}", example.title);
        }
    }

    #[test]
    fn code_reflects_active_item_and_variant() {
        let config = config();
        let elevated = &config.examples[2].code;
        assert!(elevated.contains(".variant(AppBarVariant::Elevated)"));
        assert!(elevated.contains(".active_item(\"about\")"));
        assert!(elevated.contains("AppBarLogo::Glyph(\"A\".into())"));
    }

    #[test]
    fn sticky_example_includes_scroll_text() {
        let config = config();
        let code = &config.examples[3].code;
        assert!(code.contains(".position(AppBarPosition::Sticky)"));
        assert!(code.contains("This content is scrollable."));
    }
}
