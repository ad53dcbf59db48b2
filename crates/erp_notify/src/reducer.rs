use erp_types::{Toast, ToastUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastAction {
    Add(Toast),
    Update { id: String, update: ToastUpdate },
    /// `None` dismisses every toast
    Dismiss(Option<String>),
    /// `None` removes every toast
    Remove(Option<String>),
}

/// Apply `action` to `state`. The result never holds more than `limit` toasts.
pub fn reduce(state: &[Toast], action: &ToastAction, limit: usize) -> Vec<Toast> {
    match action {
        ToastAction::Add(toast) => std::iter::once(toast.clone())
            .chain(state.iter().cloned())
            .take(limit)
            .collect(),

        ToastAction::Update { id, update } => state
            .iter()
            .cloned()
            .map(|mut toast| {
                if &toast.id == id {
                    toast.merge(update);
                }
                toast
            })
            .collect(),

        ToastAction::Dismiss(target) => state
            .iter()
            .cloned()
            .map(|mut toast| {
                if target.as_ref().map_or(true, |id| *id == toast.id) {
                    toast.open = false;
                }
                toast
            })
            .collect(),

        ToastAction::Remove(None) => Vec::new(),
        ToastAction::Remove(Some(id)) => {
            state.iter().filter(|toast| &toast.id != id).cloned().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erp_types::ToastVariant;

    fn toast(id: &str) -> Toast {
        Toast {
            id: id.to_string(),
            title: format!("toast {}", id),
            description: None,
            variant: ToastVariant::Default,
            open: true,
        }
    }

    #[test]
    fn test_add_never_exceeds_limit() {
        let mut state = Vec::new();
        for i in 0..10 {
            state = reduce(&state, &ToastAction::Add(toast(&i.to_string())), 1);
            assert!(state.len() <= 1);
        }
        assert_eq!(state[0].id, "9");
    }

    #[test]
    fn test_add_prepends() {
        let mut state = Vec::new();
        for id in ["a", "b", "c", "d"] {
            state = reduce(&state, &ToastAction::Add(toast(id)), 3);
        }
        let ids: Vec<&str> = state.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "c", "b"]);
    }

    #[test]
    fn test_update_merges_by_id() {
        let state = vec![toast("1"), toast("2")];
        let state = reduce(
            &state,
            &ToastAction::Update {
                id: "2".to_string(),
                update: ToastUpdate {
                    title: Some("changed".to_string()),
                    ..Default::default()
                },
            },
            5,
        );
        assert_eq!(state[0].title, "toast 1");
        assert_eq!(state[1].title, "changed");
    }

    #[test]
    fn test_dismiss_one_and_all() {
        let state = vec![toast("1"), toast("2")];

        let one = reduce(&state, &ToastAction::Dismiss(Some("1".to_string())), 5);
        assert!(!one[0].open);
        assert!(one[1].open);

        let all = reduce(&state, &ToastAction::Dismiss(None), 5);
        assert!(all.iter().all(|t| !t.open));
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_remove_one_and_all() {
        let state = vec![toast("1"), toast("2")];
        let one = reduce(&state, &ToastAction::Remove(Some("2".to_string())), 5);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].id, "1");

        assert!(reduce(&state, &ToastAction::Remove(None), 5).is_empty());
        // unknown ids are ignored
        assert_eq!(reduce(&state, &ToastAction::Remove(Some("x".to_string())), 5).len(), 2);
    }
}
