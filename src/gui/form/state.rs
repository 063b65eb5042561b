use crate::core::{
    attachment::Attachment,
    catalog::{
        is_standard_occupation,
        OTHER_OCCUPATION,
    },
    models::{
        join_province_canton,
        split_province_canton,
    },
    record::input_date,
    validation::{
        celular_prefix_warning,
        normalize_digits,
        validate_member,
        ValidationError,
    },
    Member,
};

/// Draft being edited plus the transient state of the registration form.
pub struct FormState {
    original: Option<Member>,
    pub draft: Member,
    custom_occupation: bool,
    custom_occupation_text: String,
    province: String,
    canton: String,
    attachment: Option<Attachment>,
    celular_warning: Option<&'static str>,
    pub commissions_open: bool,
}

/// What a submit hands to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub original: Option<Member>,
    pub draft: Member,
    pub attachment: Option<Attachment>,
}

fn date_for_input(raw: &str) -> String {
    let normalized = input_date(raw);
    if normalized.is_empty() {
        raw.to_string()
    } else {
        normalized
    }
}

impl FormState {
    pub fn new_create() -> Self {
        Self::from_draft(None, Member::new_draft())
    }

    pub fn new_edit(member: &Member) -> Self {
        let mut draft = member.clone();
        draft.clear_upload();
        draft.fecha_nacimiento = date_for_input(&draft.fecha_nacimiento);
        draft.fecha_ingreso = date_for_input(&draft.fecha_ingreso);
        Self::from_draft(Some(member.clone()), draft)
    }

    fn from_draft(original: Option<Member>, draft: Member) -> Self {
        let (province, canton) = split_province_canton(&draft.provincia_canton);
        let occupation = draft.ocupacion_actual.trim();
        let custom_occupation = !occupation.is_empty() && !is_standard_occupation(occupation);

        Self {
            province: province.to_string(),
            canton: canton.to_string(),
            custom_occupation,
            custom_occupation_text: if custom_occupation {
                draft.ocupacion_actual.clone()
            } else {
                String::new()
            },
            original,
            draft,
            attachment: None,
            celular_warning: None,
            commissions_open: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.original.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Editar Socio"
        } else {
            "Registro de Nuevo Socio"
        }
    }

    pub fn original(&self) -> Option<&Member> {
        self.original.as_ref()
    }

    pub fn set_cedula(&mut self, input: &str) {
        self.draft.cedula = normalize_digits(input);
    }

    pub fn set_celular(&mut self, input: &str) {
        self.draft.celular = normalize_digits(input);
        if self.draft.celular.starts_with("09") || self.draft.celular.is_empty() {
            self.celular_warning = None;
        }
    }

    /// Prefix check run when the celular input loses focus.
    pub fn celular_blur(&mut self) {
        self.celular_warning = celular_prefix_warning(&self.draft.celular);
    }

    pub fn celular_warning(&self) -> Option<&'static str> {
        self.celular_warning
    }

    /// Value shown in the occupation selector.
    pub fn occupation_choice(&self) -> &str {
        if self.custom_occupation {
            OTHER_OCCUPATION
        } else {
            &self.draft.ocupacion_actual
        }
    }

    pub fn is_custom_occupation(&self) -> bool {
        self.custom_occupation
    }

    pub fn select_occupation(&mut self, value: &str) {
        if value == OTHER_OCCUPATION {
            self.custom_occupation = true;
            self.draft.ocupacion_actual = self.custom_occupation_text.clone();
        } else {
            self.custom_occupation = false;
            self.draft.ocupacion_actual = value.to_string();
        }
    }

    pub fn custom_occupation_text(&self) -> &str {
        &self.custom_occupation_text
    }

    pub fn set_custom_occupation(&mut self, text: &str) {
        self.custom_occupation_text = text.to_string();
        self.draft.ocupacion_actual = text.to_string();
    }

    pub fn toggle_commission(&mut self, role: &str) {
        self.draft.comite_comision.toggle(role);
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn canton(&self) -> &str {
        &self.canton
    }

    pub fn set_province(&mut self, province: &str) {
        self.province = province.to_string();
        self.draft.provincia_canton = join_province_canton(&self.province, &self.canton);
    }

    pub fn set_canton(&mut self, canton: &str) {
        self.canton = canton.to_string();
        self.draft.provincia_canton = join_province_canton(&self.province, &self.canton);
    }

    pub fn copy_cedula_to_registration(&mut self) -> Result<(), ValidationError> {
        if self.draft.cedula.is_empty() {
            return Err(ValidationError::MissingCedula);
        }
        self.draft.carnet_registro = self.draft.cedula.clone();
        Ok(())
    }

    pub fn attach(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Whether the record already has a scanned ID and no replacement is pending.
    pub fn has_stored_document(&self) -> bool {
        self.attachment.is_none()
            && self
                .original
                .as_ref()
                .and_then(|member| member.link_cedula_digital.as_deref())
                .map_or(false, |link| !link.trim().is_empty())
    }

    pub fn submit(&self) -> Result<Submission, ValidationError> {
        validate_member(&self.draft)?;
        Ok(Submission {
            original: self.original.clone(),
            draft: self.draft.clone(),
            attachment: self.attachment.clone(),
        })
    }
}
