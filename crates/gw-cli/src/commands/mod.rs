pub mod analytics;
pub mod dashboard;
pub mod dispatch;
pub mod portal;
pub mod project;
pub mod projects;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support {
    use gw_core::RecordStore;
    use gw_view::screens::ViewLimits;

    use crate::context::AppContext;

    pub fn demo_context() -> AppContext {
        AppContext {
            store: RecordStore::demo().expect("demo fixture"),
            limits: ViewLimits::default(),
            portal_project: "ventura".to_string(),
        }
    }
}
