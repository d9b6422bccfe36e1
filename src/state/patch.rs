//! Partial state updates.

use super::{AppState, CurrentView};
use crate::models::{Account, FaqMap, MaterialMap};

/// Declares `StatePatch` with one optional slot per `AppState` field.
///
/// `values` setters accept anything convertible into the field type;
/// `options` setters take the `Option` as-is so `None` can clear the field.
macro_rules! state_patch {
    (
        values { $($field:ident: $ty:ty),* $(,)? }
        options { $($opt_field:ident: $opt_ty:ty),* $(,)? }
    ) => {
        /// A partial update of [`AppState`].
        ///
        /// Each set slot replaces the whole field; there is no deep merge.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct StatePatch {
            $($field: Option<$ty>,)*
            $($opt_field: Option<Option<$opt_ty>>,)*
        }

        impl StatePatch {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
            $(
                pub fn $opt_field(mut self, value: Option<$opt_ty>) -> Self {
                    self.$opt_field = Some(value);
                    self
                }
            )*

            /// Merge into `state`, replacing every field this patch sets.
            pub fn apply(self, state: &mut AppState) {
                $(if let Some(value) = self.$field { state.$field = value; })*
                $(if let Some(value) = self.$opt_field { state.$opt_field = value; })*
            }

            /// Names of the fields this patch sets.
            pub fn touched(&self) -> Vec<&'static str> {
                let mut names = Vec::new();
                $(if self.$field.is_some() { names.push(stringify!($field)); })*
                $(if self.$opt_field.is_some() { names.push(stringify!($opt_field)); })*
                names
            }

            pub fn is_empty(&self) -> bool {
                self.touched().is_empty()
            }
        }
    };
}

state_patch! {
    values {
        accounts: Vec<Account>,
        current_view: CurrentView,
        query: String,
        faqs: FaqMap,
        materiais: MaterialMap,
        data_loaded: bool,
        login_email: String,
        login_senha: String,
        new_nome: String,
        new_email: String,
        new_senha: String,
        new_faq_pergunta: String,
        new_faq_resposta: String,
        new_material_description: String,
        new_material_link: String,
        focus: usize,
    }
    options {
        current_user: Account,
        selected: String,
    }
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the anonymous session: signed out, home, nothing selected.
    pub fn signed_out() -> Self {
        Self::new()
            .current_user(None)
            .login_email(String::new())
            .login_senha(String::new())
            .selected(None)
            .query(String::new())
            .current_view(CurrentView::Home)
            .data_loaded(false)
            .focus(0usize)
    }

    /// Clear the new-account form.
    pub fn clear_account_form(self) -> Self {
        self.new_nome(String::new())
            .new_email(String::new())
            .new_senha(String::new())
    }

    /// Clear the FAQ form.
    pub fn clear_faq_form(self) -> Self {
        self.new_faq_pergunta(String::new())
            .new_faq_resposta(String::new())
    }

    /// Clear the material form.
    pub fn clear_material_form(self) -> Self {
        self.new_material_description(String::new())
            .new_material_link(String::new())
    }
}
