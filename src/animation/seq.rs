//! Pull-based sequences for durations, value pairs and track lists.

/// Result of pulling from a [`Seq`]. Running dry is a signal, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Pull<T> {
    Item(T),
    Exhausted,
}

impl<T> Pull<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Item(v) => Some(v),
            Self::Exhausted => None,
        }
    }
}

/// Finite, repeat-forever or cycle-forever sequence with a rewindable cursor.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seq<T> {
    Once {
        items: Vec<T>,
        #[serde(skip)]
        pos: usize,
    },
    Repeat(T),
    Cycle {
        items: Vec<T>,
        #[serde(skip)]
        pos: usize,
    },
}

impl<T: Clone> Seq<T> {
    pub fn once(items: impl IntoIterator<Item = T>) -> Self {
        Self::Once {
            items: items.into_iter().collect(),
            pos: 0,
        }
    }

    pub fn repeat(item: T) -> Self {
        Self::Repeat(item)
    }

    /// An empty cycle is exhausted immediately.
    pub fn cycle(items: impl IntoIterator<Item = T>) -> Self {
        Self::Cycle {
            items: items.into_iter().collect(),
            pos: 0,
        }
    }

    pub fn pull(&mut self) -> Pull<T> {
        match self {
            Self::Once { items, pos } => match items.get(*pos) {
                Some(v) => {
                    *pos += 1;
                    Pull::Item(v.clone())
                }
                None => Pull::Exhausted,
            },
            Self::Repeat(v) => Pull::Item(v.clone()),
            Self::Cycle { items, pos } => {
                if items.is_empty() {
                    return Pull::Exhausted;
                }
                let v = items[*pos % items.len()].clone();
                *pos = (*pos + 1) % items.len();
                Pull::Item(v)
            }
        }
    }

    pub fn reset(&mut self) {
        match self {
            Self::Once { pos, .. } | Self::Cycle { pos, .. } => *pos = 0,
            Self::Repeat(_) => {}
        }
    }

    pub fn is_infinite(&self) -> bool {
        match self {
            Self::Once { .. } => false,
            Self::Repeat(_) => true,
            Self::Cycle { items, .. } => !items.is_empty(),
        }
    }
}

impl<T: Clone> Iterator for Seq<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pull().into_option()
    }
}

/// How the overlapping value pairs of an animation are walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairPolicy {
    #[default]
    Once,
    Cycle,
}

impl PairPolicy {
    pub fn seq<T: Clone>(self, values: &[T]) -> Seq<(T, T)> {
        let pairs = pairs_of(values);
        match self {
            Self::Once => Seq::once(pairs),
            Self::Cycle => Seq::cycle(pairs),
        }
    }
}

/// `[v0, v1, v2]` -> `[(v0, v1), (v1, v2)]`.
pub fn pairs_of<T: Clone>(values: &[T]) -> Vec<(T, T)> {
    values
        .windows(2)
        .map(|w| (w[0].clone(), w[1].clone()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/seq.rs"]
mod tests;
