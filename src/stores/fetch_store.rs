// ============================================================================
// FETCH STORE - Local state of one remote payload
// ============================================================================
// There is no error variant: a failed fetch keeps the view in Loading.
// ============================================================================

use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(Rc<T>),
}

// Manual impl: derive would require `T: Clone`
impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Ready(data) => FetchState::Ready(Rc::clone(data)),
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<Rc<T>> {
        match self {
            FetchState::Loading => None,
            FetchState::Ready(data) => Some(Rc::clone(data)),
        }
    }
}
