//! Resource label showing the active document's name and description

use cosmic::iced::font::Style;
use cosmic::iced::{Alignment, Font};
use cosmic::iced_core::Color;
use cosmic::widget::{button, horizontal_space, row, text, tooltip};
use cosmic::Element;
use std::cell::{Cell, RefCell};

use crate::message::{Message, TitleMessage};
use crate::title::{ElementId, LabelContent, LabelOptions, LabelWidget, TitleEvent};
use crate::utils::{Disposable, Emitter};

/// Label widget backing the title
pub struct ResourceLabel {
    id: ElementId,
    current: RefCell<Option<(LabelContent, LabelOptions)>>,
    foreground: Cell<Option<Color>>,
    click: Emitter<TitleEvent>,
}

impl ResourceLabel {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            current: RefCell::new(None),
            foreground: Cell::new(None),
            click: Emitter::new(),
        }
    }

    /// Content and options last pushed, if any
    pub fn current(&self) -> Option<(LabelContent, LabelOptions)> {
        self.current.borrow().clone()
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground.get()
    }

    /// Deliver a click on the label to its listeners
    pub fn emit_click(&self, event: &TitleEvent) {
        self.click.fire(event);
    }

    /// Create the label view
    pub fn view(&self) -> Element<'static, Message> {
        let Some((content, options)) = self.current() else {
            return horizontal_space().into();
        };

        let mut name = text(content.name).size(13);
        if options.italic {
            name = name.font(Font {
                style: Style::Italic,
                ..Font::default()
            });
        }
        if let Some(color) = self.foreground.get() {
            name = name.class(cosmic::theme::Text::Color(color));
        }

        let mut label_row = row::with_capacity(2)
            .push(name)
            .spacing(6)
            .align_y(Alignment::Center);
        if !content.description.is_empty() {
            label_row = label_row.push(text(content.description).size(11));
        }

        let pressable = button::custom(label_row)
            .on_press(Message::Title(TitleMessage::LabelPressed))
            .padding([2, 6]);

        if options.title.is_empty() {
            pressable.into()
        } else {
            tooltip(pressable, text(options.title), tooltip::Position::Bottom).into()
        }
    }
}

impl LabelWidget for ResourceLabel {
    fn id(&self) -> ElementId {
        self.id
    }

    fn set_label(&self, content: LabelContent, options: LabelOptions) {
        *self.current.borrow_mut() = Some((content, options));
    }

    fn clear(&self) {
        *self.current.borrow_mut() = None;
    }

    fn set_foreground(&self, color: Option<Color>) {
        self.foreground.set(color);
    }

    fn on_click(&self, listener: Box<dyn Fn(&TitleEvent)>) -> Disposable {
        self.click.subscribe(listener)
    }
}
