//! Toast notification types.

/// Severity of a toast, drives its styling and icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// A single notification shown in the toaster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Visible toasts, oldest first, bounded by `capacity`.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Add a toast, evicting the oldest ones past capacity. Returns its id.
    pub fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, level, message });
        if self.items.len() > self.capacity {
            let overflow = self.items.len() - self.capacity;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push(ToastLevel::Success, "a".into());
        let b = queue.push(ToastLevel::Error, "b".into());
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[1].level, ToastLevel::Error);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut queue = ToastQueue::new(2);
        for msg in ["1", "2", "3"] {
            queue.push(ToastLevel::Info, msg.into());
        }
        let messages: Vec<_> = queue.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["2", "3"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::new(5);
        let id = queue.push(ToastLevel::Info, "x".into());
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.items().is_empty());
    }
}
