//! Client-facing portal for a single project.
//!
//! Unlike the internal detail screen, summary figures here use the compact
//! currency style; the breakdown footer spells out full amounts.

use gw_core::RecordStore;
use gw_core::entities::{PhotoSet, PortalMessage};
use serde::Serialize;

use super::{ActivityItem, CategoryBar, ChangeOrderRow, MilestoneItem, TabChip, ViewLimits};
use crate::aggregate::{budget_totals, percent_of};
use crate::error::ViewError;
use crate::format::{
    CurrencyStyle, DateDisplay, clamp_percent, format_currency, format_currency_full, pluralize,
};
use crate::state::{ChangeOrderDialog, PortalState, PortalTab};

use super::detail::{NO_BREAKDOWN, NO_CHANGE_ORDERS, NO_MILESTONES};

pub const NO_PHOTOS: &str = "No progress photos have been uploaded yet.";
pub const NO_UPDATES: &str = "No updates yet.";
pub const NO_MESSAGES: &str = "No messages yet.";

/// Photo strip tiles shown before the overflow marker.
const PREVIEW_TILES: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortalHeader {
    pub project_id: String,
    pub name: String,
    pub greeting: String,
    pub phase: String,
    pub progress: u8,
    pub progress_width: f64,
    pub target_date: DateDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalOverview {
    pub milestones: Vec<MilestoneItem>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortalBudget {
    pub spent_display: String,
    /// `62.3% of budget`; 0% when nothing is estimated.
    pub spent_pct_display: String,
    pub estimated_display: String,
    pub remaining_display: String,
    pub categories: Vec<CategoryBar>,
    /// `$747,000 of $1,200,000`.
    pub total_label: String,
    pub breakdown_empty: Option<&'static str>,
    pub change_orders: Vec<ChangeOrderRow>,
    pub change_orders_empty: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoSetCard {
    pub id: String,
    pub title: String,
    pub date: String,
    pub count_label: String,
    /// Placeholder tiles in the strip, at most four.
    pub preview_tiles: u32,
    /// Photos beyond the strip, rendered as `+N`.
    pub overflow: Option<u32>,
}

impl From<&PhotoSet> for PhotoSetCard {
    fn from(set: &PhotoSet) -> Self {
        Self {
            id: set.id.clone(),
            title: set.title.clone(),
            date: set.date.clone(),
            count_label: pluralize(set.count as usize, "photo"),
            preview_tiles: set.count.min(PREVIEW_TILES),
            overflow: (set.count > PREVIEW_TILES).then(|| set.count - PREVIEW_TILES),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalPhotos {
    pub sets: Vec<PhotoSetCard>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalUpdates {
    pub items: Vec<ActivityItem>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBubble {
    pub id: String,
    pub from: String,
    pub initials: String,
    /// Sent by the construction team; rendered on the team's side.
    pub from_team: bool,
    pub text: String,
    pub timestamp: String,
}

impl From<&PortalMessage> for MessageBubble {
    fn from(message: &PortalMessage) -> Self {
        Self {
            id: message.id.clone(),
            from: message.from.clone(),
            initials: message.initials.clone(),
            from_team: message.is_owner,
            text: message.text.clone(),
            timestamp: message.timestamp.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalMessages {
    pub thread: Vec<MessageBubble>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum PortalContent {
    Overview(PortalOverview),
    Budget(PortalBudget),
    Photos(PortalPhotos),
    Updates(PortalUpdates),
    Messages(PortalMessages),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portal {
    pub header: PortalHeader,
    pub tabs: Vec<TabChip>,
    pub content: PortalContent,
    pub message_draft: String,
    /// Modal overlay; may be open on any tab.
    pub change_order: ChangeOrderDialog,
}

pub fn build(
    store: &RecordStore,
    state: &PortalState,
    limits: &ViewLimits,
) -> Result<Portal, ViewError> {
    let project = store.require_project(&state.project_id)?;
    let id = project.id.as_str();

    let content = match state.tab {
        PortalTab::Overview => PortalContent::Overview(overview(store, id)),
        PortalTab::Budget => PortalContent::Budget(budget(store, id)),
        PortalTab::Photos => {
            let sets: Vec<PhotoSetCard> =
                store.photo_sets_for(id).into_iter().map(PhotoSetCard::from).collect();
            PortalContent::Photos(PortalPhotos {
                empty_message: sets.is_empty().then_some(NO_PHOTOS),
                sets,
            })
        }
        PortalTab::Updates => {
            let items: Vec<ActivityItem> = store
                .recent_activities(limits.portal_updates)
                .iter()
                .map(ActivityItem::from)
                .collect();
            PortalContent::Updates(PortalUpdates {
                empty_message: items.is_empty().then_some(NO_UPDATES),
                items,
            })
        }
        PortalTab::Messages => {
            let thread: Vec<MessageBubble> =
                store.messages_for(id).into_iter().map(MessageBubble::from).collect();
            PortalContent::Messages(PortalMessages {
                empty_message: thread.is_empty().then_some(NO_MESSAGES),
                thread,
            })
        }
    };

    Ok(Portal {
        header: PortalHeader {
            project_id: project.id.clone(),
            name: project.name.clone(),
            greeting: format!("Welcome, {}", project.client),
            phase: project.phase.clone(),
            progress: project.progress,
            progress_width: clamp_percent(f64::from(project.progress)),
            target_date: DateDisplay::date(&project.target_date),
        },
        tabs: PortalTab::ALL
            .into_iter()
            .map(|tab| TabChip {
                label: tab.label(),
                active: tab == state.tab,
            })
            .collect(),
        content,
        message_draft: state.message_draft.clone(),
        change_order: state.change_order.clone(),
    })
}

fn overview(store: &RecordStore, project_id: &str) -> PortalOverview {
    let milestones: Vec<MilestoneItem> =
        store.milestones_for(project_id).into_iter().map(MilestoneItem::from).collect();
    PortalOverview {
        empty_message: milestones.is_empty().then_some(NO_MILESTONES),
        milestones,
    }
}

fn budget(store: &RecordStore, project_id: &str) -> PortalBudget {
    let categories = store.budget_for(project_id);
    let totals = budget_totals(categories);
    // Ties round up, so 62.25 reads 62.3.
    let spent_pct = (percent_of(totals.actual, totals.estimated) * 10.0).round() / 10.0;
    let change_orders: Vec<ChangeOrderRow> =
        store.change_orders_for(project_id).into_iter().map(ChangeOrderRow::from).collect();
    PortalBudget {
        spent_display: format_currency(totals.actual),
        spent_pct_display: format!("{spent_pct:.1}% of budget"),
        estimated_display: format_currency(totals.estimated),
        remaining_display: format_currency(totals.remaining),
        categories: categories
            .iter()
            .map(|category| CategoryBar::build(category, CurrencyStyle::Compact))
            .collect(),
        total_label: format!(
            "{} of {}",
            format_currency_full(totals.actual),
            format_currency_full(totals.estimated)
        ),
        breakdown_empty: categories.is_empty().then_some(NO_BREAKDOWN),
        change_orders_empty: change_orders.is_empty().then_some(NO_CHANGE_ORDERS),
        change_orders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn portal(project_id: &str, tab: PortalTab) -> Portal {
        let store = RecordStore::demo().unwrap();
        let mut state = PortalState::new(project_id);
        state.select_tab(tab);
        build(&store, &state, &ViewLimits::default()).unwrap()
    }

    #[test]
    fn header_greets_the_client() {
        let view = portal("ventura", PortalTab::Overview);
        assert_eq!(view.header.greeting, "Welcome, Rick & Tracie Ventura");
        assert_eq!(view.header.progress, 85);
        assert_eq!(view.header.target_date.text(), "Apr 15, 2026");
        assert_eq!(view.tabs.len(), 5);
        assert!(view.tabs[0].active);
    }

    #[test]
    fn budget_tab_totals_and_bars() {
        let PortalContent::Budget(budget) = portal("bloemhof", PortalTab::Budget).content else {
            panic!("expected budget");
        };
        assert_eq!(budget.total_label, "$747,000 of $1,200,000");
        assert_eq!(budget.spent_display, "$747K");
        assert_eq!(budget.spent_pct_display, "62.3% of budget");
        assert_eq!(budget.estimated_display, "$1.2M");
        assert_eq!(budget.remaining_display, "$453K");
        assert_eq!(budget.categories.len(), 16);
        assert_eq!(budget.categories[0].actual_display, "$82K");
    }

    #[test]
    fn project_without_breakdown_shows_empty_state() {
        let PortalContent::Budget(budget) = portal("ventura", PortalTab::Budget).content else {
            panic!("expected budget");
        };
        assert_eq!(budget.breakdown_empty, Some(NO_BREAKDOWN));
        assert_eq!(budget.total_label, "$0 of $0");
        assert_eq!(budget.spent_pct_display, "0.0% of budget");
        assert_eq!(budget.change_orders.len(), 1);
        assert_eq!(budget.change_orders[0].id, "CO-102");
    }

    #[test]
    fn photo_sets_preview_at_most_four_tiles() {
        let PortalContent::Photos(photos) = portal("ventura", PortalTab::Photos).content else {
            panic!("expected photos");
        };
        assert_eq!(photos.sets.len(), 8);
        let first = &photos.sets[0];
        assert_eq!(first.count_label, "6 photos");
        assert_eq!(first.preview_tiles, 4);
        assert_eq!(first.overflow, Some(2));
        let sixth = &photos.sets[5];
        assert_eq!(sixth.preview_tiles, 3);
        assert_eq!(sixth.overflow, None);
        let second = &photos.sets[1];
        assert_eq!(second.overflow, None);
    }

    #[test]
    fn messages_keep_thread_order() {
        let PortalContent::Messages(messages) = portal("ventura", PortalTab::Messages).content
        else {
            panic!("expected messages");
        };
        let ids: Vec<&str> = messages.thread.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["msg-1", "msg-2", "msg-3", "msg-4", "msg-5", "msg-6"]);
        assert!(messages.thread[0].from_team);
        assert!(!messages.thread[1].from_team);
    }

    #[test]
    fn bad_target_date_keeps_messages_tab_renderable() {
        let mut store = RecordStore::demo().unwrap();
        for project in store.projects.iter_mut().filter(|p| p.id == "ventura") {
            project.target_date = "Spring 2026".to_string();
        }
        let mut state = PortalState::new("ventura");
        state.select_tab(PortalTab::Messages);

        let view = build(&store, &state, &ViewLimits::default()).unwrap();
        assert_eq!(view.header.target_date, DateDisplay::Invalid("Spring 2026".to_string()));
        assert_eq!(view.header.target_date.text(), "Invalid Date");
        let PortalContent::Messages(messages) = view.content else {
            panic!("expected messages");
        };
        assert_eq!(messages.thread.len(), 6);
    }

    #[test]
    fn updates_follow_portal_limit() {
        let store = RecordStore::demo().unwrap();
        let mut state = PortalState::new("ventura");
        state.select_tab(PortalTab::Updates);
        let limits = ViewLimits {
            portal_updates: 2,
            ..ViewLimits::default()
        };
        let PortalContent::Updates(updates) = build(&store, &state, &limits).unwrap().content
        else {
            panic!("expected updates");
        };
        assert_eq!(updates.items.len(), 2);
    }

    #[test]
    fn dialog_and_draft_pass_through() {
        let store = RecordStore::demo().unwrap();
        let mut state = PortalState::new("ventura");
        state.set_message_draft("Thanks!");
        state.change_order.open();
        state.change_order.set_title("Skylight");
        let view = build(&store, &state, &ViewLimits::default()).unwrap();
        assert_eq!(view.message_draft, "Thanks!");
        assert_eq!(view.change_order.draft().map(|d| d.title.as_str()), Some("Skylight"));
    }

    #[test]
    fn unknown_portal_project_is_not_found() {
        let store = RecordStore::demo().unwrap();
        let state = PortalState::new("nowhere");
        assert!(build(&store, &state, &ViewLimits::default()).unwrap_err().is_not_found());
    }
}
