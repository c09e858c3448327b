use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Element, HtmlInputElement};
use yew::{html, Component, Context, Html, Properties};

use super::{filter, AdminRecord};
use crate::utils::set_display;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub records: Rc<Vec<AdminRecord>>,
    /// The search box driving the filter.
    #[prop_or_default]
    pub search: Option<HtmlInputElement>,
    /// Placeholder shown while no card matches.
    #[prop_or_default]
    pub empty: Option<Element>,
}

pub enum Message {
    Search(String),
}

/// Card grid of all admins matching the current search.
pub struct AdminGrid {
    query: String,
    _listener: Option<EventListener>,
}

impl Component for AdminGrid {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let search = ctx.props().search.as_ref();

        // No debounce: the grid is re-rendered on every keystroke.
        let listener = search.map(|search| {
            let input = search.clone();
            let callback = ctx.link().callback(Message::Search);

            EventListener::new(search, "input", move |_| callback.emit(input.value()))
        });

        Self {
            query: search.map(|search| search.value()).unwrap_or_default(),
            _listener: listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Search(query) => {
                self.query = query;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let records = filter(&ctx.props().records, &self.query);

        html! {
            <>
                { for records.into_iter().map(card) }
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Some(empty) = &ctx.props().empty {
            let any = !filter(&ctx.props().records, &self.query).is_empty();

            set_display(empty, if any { "none" } else { "block" });
        }
    }
}

fn card(record: &AdminRecord) -> Html {
    let link = record.primary_link();

    let avatar = if record.avatar.is_empty() {
        html! {
            <div class="adminCard__avatar">{ record.initial().to_string() }</div>
        }
    } else {
        html! {
            <div class="adminCard__avatar">
                <img class="adminCard__avatarImg" src={record.avatar.clone()} alt={record.name.clone()} />
            </div>
        }
    };

    let chip = if link.is_some() { "Link" } else { "No Link" };

    let inner = html! {
        <article class="adminCard glass">
            { avatar }
            <div class="adminCard__meta">
                <div class="adminCard__name">{ record.name.clone() }</div>
                <div class="adminCard__role">{ record.role.clone() }</div>
            </div>
            <span class="adminCard__chip">{ chip }</span>
        </article>
    };

    match link {
        Some(href) => html! {
            <a class="adminCardLink" href={href.to_owned()} target="_blank" rel="noreferrer"
                aria-label={format!("{} link", record.name)}>
                { inner }
            </a>
        },
        None => html! {
            <div class="adminCardLink" aria-label={record.name.clone()}>
                { inner }
            </div>
        },
    }
}
