use std::slice::Iter;
use std::sync::Arc;

// A snapshot of a paged list: published states share the loaded items, a new batch yields a new snapshot
#[derive(Clone, Debug)]
pub struct PagedList<T> {
    items: Arc<Vec<T>>,
    next_offset: Option<usize>,
    batch_size: usize,
}

impl<T> PagedList<T>
where
    T: Clone,
{
    pub fn new(batch_size: usize) -> Self {
        Self {
            items: Arc::new(vec![]),
            next_offset: Some(0),
            batch_size,
        }
    }

    pub fn with_batch(&self, batch: Vec<T>) -> Self {
        let loaded_count = batch.len();
        let mut items = Arc::clone(&self.items);
        Arc::make_mut(&mut items).extend(batch);

        let next_offset = self.next_offset.and_then(|offset| {
            if loaded_count >= self.batch_size {
                Some(offset + loaded_count)
            } else {
                None
            }
        });

        Self {
            items,
            next_offset,
            batch_size: self.batch_size,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    pub fn next_offset(&self) -> Option<usize> {
        self.next_offset
    }

    pub fn has_more(&self) -> bool {
        self.next_offset.is_some()
    }
}

impl<T> PartialEq for PagedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.next_offset == other.next_offset && self.items == other.items
    }
}
