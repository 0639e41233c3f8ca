use contracts::domain::a002_faq::{Faq, FaqInput};
use contracts::domain::common::non_empty;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_faq::api;
use crate::shared::components::{FormField, FormModal};
use crate::system::auth::context::{handle_api_error, use_auth};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub sort_order: String,
    pub is_published: bool,
}

impl FaqDraft {
    pub fn from_faq(faq: Option<&Faq>) -> Self {
        match faq {
            Some(f) => Self {
                question: f.question.clone(),
                answer: f.answer.clone(),
                category: f.category.clone().unwrap_or_default(),
                sort_order: f.sort_order.map(|n| n.to_string()).unwrap_or_default(),
                is_published: f.is_published,
            },
            None => Self::default(),
        }
    }

    pub fn to_input(&self) -> Result<FaqInput, String> {
        let question = self.question.trim();
        let answer = self.answer.trim();
        if question.is_empty() {
            return Err("Question is required".into());
        }
        if answer.is_empty() {
            return Err("Answer is required".into());
        }
        let sort_order = match self.sort_order.trim() {
            "" => None,
            s => Some(
                s.parse::<i64>()
                    .map_err(|_| "Order must be a whole number".to_string())?,
            ),
        };
        Ok(FaqInput {
            question: question.to_string(),
            answer: answer.to_string(),
            category: non_empty(&self.category),
            sort_order,
            is_published: self.is_published,
        })
    }
}

#[component]
pub fn FaqDetails(faq: Option<Faq>, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let draft = FaqDraft::from_faq(faq.as_ref());
    let id = faq.map(|f| f.id);
    let title = if id.is_some() { "Edit FAQ" } else { "New FAQ" };

    let question = RwSignal::new(draft.question);
    let answer = RwSignal::new(draft.answer);
    let category = RwSignal::new(draft.category);
    let sort_order = RwSignal::new(draft.sort_order);
    let is_published = RwSignal::new(draft.is_published);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let disabled = Signal::derive(move || saving.get());

    let on_save = Callback::new(move |_: ()| {
        let draft = FaqDraft {
            question: question.get_untracked(),
            answer: answer.get_untracked(),
            category: category.get_untracked(),
            sort_order: sort_order.get_untracked(),
            is_published: is_published.get_untracked(),
        };
        let input = match draft.to_input() {
            Ok(input) => input,
            Err(msg) => return error.set(Some(msg)),
        };

        saving.set(true);
        error.set(None);
        let id = id.clone();
        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_faq(id, &input).await,
                None => api::create_faq(&input).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    error.set(Some(handle_api_error(set_auth_state, &e)));
                    saving.set(false);
                }
            }
        });
    });

    view! {
        <FormModal title=title error=error saving=saving on_close=on_close on_save=on_save>
            <FormField label="Question *" value=question disabled=disabled />
            <div class="form__group">
                <Label>"Answer *"</Label>
                <Textarea value=answer disabled=disabled />
            </div>
            <div class="form__row">
                <FormField label="Category" value=category disabled=disabled />
                <FormField label="Order" value=sort_order input_type=InputType::Number disabled=disabled />
            </div>
            <div class="form__group">
                <Checkbox checked=is_published label="Published" />
            </div>
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_question_and_answer() {
        let mut draft = FaqDraft {
            question: "How long is shipping?".into(),
            ..FaqDraft::default()
        };
        assert_eq!(draft.to_input().unwrap_err(), "Answer is required");

        draft.answer = " 3-5 days ".into();
        let input = draft.to_input().unwrap();
        assert_eq!(input.answer, "3-5 days");
        assert_eq!(input.category, None);
        assert_eq!(input.sort_order, None);
    }

    #[test]
    fn test_sort_order_must_be_integer() {
        let draft = FaqDraft {
            question: "q".into(),
            answer: "a".into(),
            sort_order: "first".into(),
            ..FaqDraft::default()
        };
        assert!(draft.to_input().is_err());
    }
}
