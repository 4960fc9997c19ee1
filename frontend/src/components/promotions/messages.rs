use common::dispatch::{Action, Completion};
use common::model::form::Field;

#[derive(Clone)]
pub enum Msg {
    EditField(Field, String),
    Trigger(Action),
    Completed(Completion),
}
