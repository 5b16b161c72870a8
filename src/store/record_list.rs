use std::sync::Arc;

use super::ids::IdSequence;

/// A record type that can live in a [`RecordList`].
pub trait Record: Clone {
    /// Fields submitted by the add/edit dialog.
    type Form;

    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;

    /// Fields matched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    fn from_form(id: String, form: Self::Form) -> Self;

    /// Overwrites the editable fields. Id and fields outside the form are kept.
    fn apply_form(&mut self, form: Self::Form);

    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome<T> {
    Removed(T),
    /// The confirmation was refused; nothing changed.
    Declined,
    NotFound,
}

/// Ordered in-memory records of one type with search and CRUD.
///
/// Mutations are copy-on-write: a snapshot returned by [`RecordList::list`]
/// never observes later changes.
#[derive(Debug, Clone)]
pub struct RecordList<T: Record> {
    records: Arc<Vec<T>>,
    ids: IdSequence,
}

impl<T: Record> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            ids: IdSequence::new(T::ID_PREFIX),
        }
    }
}

impl<T: Record> RecordList<T> {
    pub fn seeded(records: Vec<T>) -> Self {
        let ids = IdSequence::after_existing(T::ID_PREFIX, records.iter().map(T::id));
        Self {
            records: Arc::new(records),
            ids,
        }
    }

    pub fn list(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn filter(&self, query: &str) -> Vec<T> {
        self.filter_where(query, |_| true)
    }

    /// Search combined with an extra view filter, in list order.
    pub fn filter_where(&self, query: &str, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches(&needle) && keep(*record))
            .cloned()
            .collect()
    }

    pub fn add(&mut self, form: T::Form) -> T {
        let record = T::from_form(self.ids.next_id(), form);
        Arc::make_mut(&mut self.records).push(record.clone());
        record
    }

    pub fn edit(&mut self, id: &str, form: T::Form) -> Option<T> {
        self.update(id, |record| record.apply_form(form))
    }

    /// Applies `change` to the record with `id`, returning the updated record.
    pub fn update(&mut self, id: &str, change: impl FnOnce(&mut T)) -> Option<T> {
        let index = self.position(id)?;
        let record = &mut Arc::make_mut(&mut self.records)[index];
        change(record);
        Some(record.clone())
    }

    /// Removes the record with `id` once `confirm` accepts it.
    pub fn remove(&mut self, id: &str, confirm: impl FnOnce(&T) -> bool) -> RemoveOutcome<T> {
        let Some(index) = self.position(id) else {
            return RemoveOutcome::NotFound;
        };
        if !confirm(&self.records[index]) {
            return RemoveOutcome::Declined;
        }
        RemoveOutcome::Removed(Arc::make_mut(&mut self.records).remove(index))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        title: String,
        body: String,
        pinned: bool,
    }

    impl Record for Note {
        type Form = (String, String);

        const ID_PREFIX: &'static str = "N";

        fn id(&self) -> &str {
            &self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str(), self.body.as_str()]
        }

        fn from_form(id: String, (title, body): Self::Form) -> Self {
            Note {
                id,
                title,
                body,
                pinned: false,
            }
        }

        fn apply_form(&mut self, (title, body): Self::Form) {
            self.title = title;
            self.body = body;
        }
    }

    fn form(title: &str, body: &str) -> (String, String) {
        (title.to_string(), body.to_string())
    }

    fn notes() -> RecordList<Note> {
        let mut list = RecordList::default();
        list.add(form("Harvest", "Rice in Kampong Cham"));
        list.add(form("Market day", "Tomatoes"));
        list.add(form("Irrigation", "Check pumps"));
        list
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let list = notes();
        assert_eq!(list.filter(""), *list.list());
    }

    #[test]
    fn search_is_case_insensitive_over_search_fields() {
        let list = notes();
        let hits: Vec<_> = list.filter("KAMPONG").into_iter().map(|n| n.id).collect();
        assert_eq!(hits, ["N001"]);
        assert!(list.filter("N002").is_empty(), "id is not searchable");
        assert!(list.filter("zzz").is_empty());
    }

    #[test]
    fn filter_where_combines_with_search() {
        let mut list = notes();
        list.update("N003", |n| n.pinned = true);
        let pinned = list.filter_where("", |n| n.pinned);
        assert_eq!(pinned.len(), 1);
        assert_eq!(pinned[0].id, "N003");
        assert!(list.filter_where("harvest", |n| n.pinned).is_empty());
    }

    #[test]
    fn edit_keeps_fields_outside_the_form() {
        let mut list = notes();
        list.update("N002", |n| n.pinned = true);
        let edited = list.edit("N002", form("Market", "Cucumbers")).unwrap();
        assert_eq!(edited.id, "N002");
        assert_eq!(edited.title, "Market");
        assert!(edited.pinned);
        assert_eq!(list.get("N002"), Some(&edited));
    }

    #[test]
    fn missing_ids_report_not_found() {
        let mut list = notes();
        assert_eq!(list.edit("N404", form("x", "y")), None);
        assert_eq!(list.update("N404", |n| n.pinned = true), None);
        assert_eq!(list.remove("N404", |_| true), RemoveOutcome::NotFound);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn declined_remove_changes_nothing() {
        let mut list = notes();
        let before = list.list();
        assert_eq!(list.remove("N001", |_| false), RemoveOutcome::Declined);
        assert_eq!(*list.list(), *before);
    }

    #[test]
    fn confirmed_remove_drops_only_the_target() {
        let mut list = notes();
        let outcome = list.remove("N002", |note| note.title == "Market day");
        assert!(matches!(outcome, RemoveOutcome::Removed(ref n) if n.id == "N002"));
        let ids: Vec<_> = list.list().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, ["N001", "N003"]);
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut list = notes();
        list.remove("N003", |_| true);
        let added = list.add(form("Seeds", "Order more"));
        assert_eq!(added.id, "N004");
    }

    #[test]
    fn snapshots_do_not_see_later_mutations() {
        let mut list = notes();
        let snapshot = list.list();
        list.add(form("New", "Entry"));
        list.edit("N001", form("Changed", "Body"));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].title, "Harvest");
        assert_eq!(list.len(), 4);
    }
}
