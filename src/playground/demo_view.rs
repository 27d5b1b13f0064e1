//! DemoView - Generic Component Demo
//!
//! Renders any [`ComponentConfig`] as an "Examples" tab and, when the config
//! carries documentation, a "Documentation" tab.

use std::sync::Arc;

use gpui::{
    div, prelude::*, px, AnyElement, AppContext, Context, Entity, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window,
};

use crate::components::layout::app_bar::{AppBar, AppBarEvent};
use crate::playground::code_block::CodeBlock;
use crate::playground::component_tabs::{TabBar, TabSelection};
use crate::playground::demo_element::DemoResources;
use crate::playground::demo_page::{doc_sections, tabs_for, DocSection, PropRow, DOCUMENTATION_TAB, EXAMPLES_TAB};
use crate::playground::types::{ComponentConfig, ComponentExample};
use crate::theme::colors::AkColors;
use crate::theme::typography::Typography;
use crate::viewport::Viewport;

struct ExampleView {
    resources: DemoResources,
    code: Entity<CodeBlock>,
}

struct DocumentationView {
    sections: Vec<DocSection>,
    installation: Option<Entity<CodeBlock>>,
    basic: Entity<CodeBlock>,
    advanced: Vec<Entity<CodeBlock>>,
}

pub struct DemoView {
    key: SharedString,
    config: Arc<ComponentConfig>,
    tabs: TabSelection,
    examples: Vec<ExampleView>,
    documentation: Option<DocumentationView>,
    _subscriptions: Vec<Subscription>,
}

impl DemoView {
    pub fn new(
        key: impl Into<SharedString>,
        config: Arc<ComponentConfig>,
        viewport: &Entity<Viewport>,
        cx: &mut Context<Self>,
    ) -> Self {
        let key = key.into();
        let tabs = TabSelection::new(tabs_for(&config), EXAMPLES_TAB);

        let mut subscriptions = Vec::new();
        let mut examples = Vec::with_capacity(config.examples.len());
        for example in &config.examples {
            let resources = DemoResources::build(&example.component, viewport, cx);
            for app_bar in resources.app_bars() {
                subscriptions.push(cx.subscribe(app_bar, Self::on_app_bar_event));
            }
            let code = example.code.clone();
            let code = cx.new(|_| CodeBlock::new(code).title("Code"));
            examples.push(ExampleView { resources, code });
        }

        let documentation = config.documentation.as_ref().map(|doc| {
            let installation = doc.usage.installation.clone().map(|command| {
                cx.new(|_| CodeBlock::new(command).language("bash"))
            });
            let basic_example = doc.usage.basic_example.clone();
            let basic = cx.new(|_| CodeBlock::new(basic_example));
            let advanced = doc
                .usage
                .advanced_examples
                .iter()
                .map(|example| {
                    let code = example.code.clone();
                    cx.new(|_| CodeBlock::new(code))
                })
                .collect();
            DocumentationView {
                sections: doc_sections(doc),
                installation,
                basic,
                advanced,
            }
        });

        tracing::debug!(component = %key, examples = examples.len(), "Demo view created");

        Self {
            key,
            config,
            tabs,
            examples,
            documentation,
            _subscriptions: subscriptions,
        }
    }

    pub fn config(&self) -> &Arc<ComponentConfig> {
        &self.config
    }

    pub fn tabs(&self) -> &TabSelection {
        &self.tabs
    }

    pub fn select_tab(&mut self, id: &str, cx: &mut Context<Self>) {
        if self.tabs.select(id) {
            cx.notify();
        }
    }

    /// Demo app bars are controlled: the selected item becomes active
    fn on_app_bar_event(
        &mut self,
        app_bar: Entity<AppBar>,
        event: &AppBarEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            AppBarEvent::BrandClicked => {
                tracing::info!(component = %self.key, "Demo brand clicked");
            }
            AppBarEvent::MenuItemSelected { id, href } => {
                tracing::info!(component = %self.key, item = %id, href = ?href, "Demo menu item selected");
                let id = id.clone();
                app_bar.update(cx, |app_bar, cx| app_bar.set_active_item(Some(id), cx));
            }
            AppBarEvent::ActionClicked { id } => {
                tracing::info!(component = %self.key, action = %id, "Demo action clicked");
            }
        }
    }

    fn heading(text: impl Into<SharedString>, size: f32) -> impl IntoElement {
        div()
            .text_size(px(size))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(AkColors::text_primary())
            .child(text.into())
    }

    fn paragraph(text: impl Into<SharedString>) -> impl IntoElement {
        div()
            .text_size(px(Typography::TEXT_SM))
            .text_color(AkColors::text_secondary())
            .child(text.into())
    }

    fn render_example(&self, ix: usize, example: &ComponentExample, view: &ExampleView) -> AnyElement {
        let mut scope = view
            .resources
            .scope(SharedString::from(format!("{}-example-{ix}", self.key)));
        let preview = example.component.render(&mut scope);

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(Self::heading(example.title.clone(), Typography::TEXT_LG))
                    .children(example.description.clone().map(Self::paragraph)),
            )
            .child(
                div()
                    .relative()
                    .p_6()
                    .rounded_lg()
                    .bg(AkColors::surface())
                    .border_1()
                    .border_color(AkColors::border())
                    .child(preview),
            )
            .child(view.code.clone())
            .into_any_element()
    }

    fn render_examples(&self) -> impl IntoElement {
        let examples: Vec<_> = self
            .config
            .examples
            .iter()
            .zip(&self.examples)
            .enumerate()
            .map(|(ix, (example, view))| self.render_example(ix, example, view))
            .collect();

        div().flex().flex_col().gap_8().children(examples)
    }

    fn render_props_table(rows: &[PropRow]) -> impl IntoElement {
        let cell = |width: f32| div().w(px(width)).flex_shrink_0().px_3().py_2();
        let code = |text: SharedString| {
            div()
                .font_family(Typography::FONT_MONO)
                .text_size(px(Typography::TEXT_XS))
                .child(text)
        };

        let header = div()
            .flex()
            .bg(AkColors::surface_subtle())
            .text_size(px(Typography::TEXT_XS))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(AkColors::text_secondary())
            .child(cell(180.0).child("Name"))
            .child(cell(240.0).child("Type"))
            .child(cell(160.0).child("Default"))
            .child(div().flex_1().px_3().py_2().child("Description"));

        let body = rows.iter().map(|row| {
            div()
                .flex()
                .border_t_1()
                .border_color(AkColors::border())
                .text_size(px(Typography::TEXT_SM))
                .text_color(AkColors::text_primary())
                .child(
                    cell(180.0)
                        .flex()
                        .gap_1()
                        .child(code(row.name.clone()))
                        .when(row.required, |el| {
                            el.child(div().text_color(AkColors::danger()).child("*"))
                        }),
                )
                .child(cell(240.0).child(code(row.ty.clone())))
                .child(cell(160.0).child(code(row.default.clone())))
                .child(
                    div()
                        .flex_1()
                        .px_3()
                        .py_2()
                        .text_color(AkColors::text_secondary())
                        .child(row.description.clone()),
                )
        });

        div()
            .rounded_lg()
            .overflow_hidden()
            .border_1()
            .border_color(AkColors::border())
            .bg(AkColors::surface())
            .child(header)
            .children(body.collect::<Vec<_>>())
    }

    fn render_section(&self, section: &DocSection, doc: &DocumentationView) -> AnyElement {
        let content: AnyElement = match section {
            DocSection::Overview(description) => Self::paragraph(description.clone()).into_any_element(),
            DocSection::Installation(_) => match &doc.installation {
                Some(block) => block.clone().into_any_element(),
                None => div().into_any_element(),
            },
            DocSection::BasicUsage(_) => doc.basic.clone().into_any_element(),
            DocSection::Props(rows) => Self::render_props_table(rows).into_any_element(),
            DocSection::AdvancedUsage(examples) => div()
                .flex()
                .flex_col()
                .gap_6()
                .children(examples.iter().zip(&doc.advanced).map(|(example, block)| {
                    div()
                        .flex()
                        .flex_col()
                        .gap_2()
                        .child(Self::heading(example.title.clone(), Typography::TEXT_BASE))
                        .children(example.description.clone().map(Self::paragraph))
                        .child(block.clone())
                }))
                .into_any_element(),
        };

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(Self::heading(section.heading(), Typography::TEXT_XL))
            .child(content)
            .into_any_element()
    }

    fn render_documentation(&self) -> impl IntoElement {
        let sections: Vec<_> = self
            .documentation
            .iter()
            .flat_map(|doc| doc.sections.iter().map(move |section| (section, doc)))
            .map(|(section, doc)| self.render_section(section, doc))
            .collect();

        div().flex().flex_col().gap_8().children(sections)
    }
}

impl Render for DemoView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let this = cx.weak_entity();
        let tab_bar = TabBar::new("component-tabs", self.tabs.clone()).on_select(
            move |id, _window, cx| {
                let _ = this.update(cx, |this, cx| this.select_tab(id, cx));
            },
        );

        let content = if self.tabs.is_active(DOCUMENTATION_TAB) {
            self.render_documentation().into_any_element()
        } else {
            self.render_examples().into_any_element()
        };

        div()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(Self::heading(self.config.name.clone(), Typography::TEXT_3XL))
                    .child(Self::paragraph(self.config.description.clone())),
            )
            .child(tab_bar)
            .child(content)
    }
}
