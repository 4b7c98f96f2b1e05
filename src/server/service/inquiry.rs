use entity::sea_orm_active_enums::InquiryStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{inquiry::InquiryRepository, property::PropertyRepository},
    error::{auth::AuthError, AppError},
    model::{
        inquiry::{CreateInquiryParam, Inquiry, InquiryFilter, UpdateInquiryParam},
        pagination::{Page, PageRequest},
        user::User,
    },
    service::mailer::{self, Email, Mailer},
};

pub struct InquiryService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
}

impl<'a> InquiryService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer) -> Self {
        Self { db, mailer }
    }

    /// Stores an inquiry and notifies the listing's agent.
    ///
    /// A failed notification is logged and does not fail the request.
    ///
    /// # Arguments
    /// - `param` - Validated inquiry fields
    /// - `user` - Submitter when logged in
    pub async fn create(
        &self,
        param: CreateInquiryParam,
        user: Option<&User>,
    ) -> Result<Inquiry, AppError> {
        let property = PropertyRepository::new(self.db)
            .find_by_id(param.property_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;

        let inquiry = InquiryRepository::new(self.db)
            .create(param, user.map(|u| u.id))
            .await?;

        tracing::info!(
            inquiry_id = inquiry.id,
            property_id = property.id,
            "Received inquiry"
        );

        match &property.agent {
            Some(agent) => {
                let email = mailer::inquiry_notification(&agent.email, &property, &inquiry);
                self.deliver(email).await;
            }
            None => tracing::warn!(
                property_id = property.id,
                "Listing has no agent to notify about inquiry {}",
                inquiry.id
            ),
        }

        Ok(inquiry)
    }

    pub async fn list(
        &self,
        filter: &InquiryFilter,
        page: PageRequest,
    ) -> Result<Page<Inquiry>, AppError> {
        let (inquiries, total) = InquiryRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page::new(inquiries, total, page))
    }

    /// Inquiries on any listing owned by `agent`.
    pub async fn mine(
        &self,
        agent: &User,
        status: Option<InquiryStatus>,
        page: PageRequest,
    ) -> Result<Page<Inquiry>, AppError> {
        let property_ids = PropertyRepository::new(self.db)
            .ids_by_agent(agent.id)
            .await?;

        let filter = InquiryFilter {
            status,
            property_ids: Some(property_ids),
            ..Default::default()
        };

        self.list(&filter, page).await
    }

    /// Gets an inquiry, marking it read on first view.
    pub async fn get(&self, actor: &User, inquiry_id: i32) -> Result<Inquiry, AppError> {
        let repo = InquiryRepository::new(self.db);

        let mut inquiry = repo.find_by_id(inquiry_id).await?.ok_or_else(not_found)?;
        self.ensure_can_manage(actor, &inquiry, "Not authorized to view this inquiry")
            .await?;

        if inquiry.status == InquiryStatus::New && repo.mark_read(inquiry.id).await? {
            inquiry.status = InquiryStatus::Read;
        }

        Ok(inquiry)
    }

    /// Updates status and notes, and records and mails a response when one is given.
    pub async fn update(
        &self,
        actor: &User,
        inquiry_id: i32,
        param: UpdateInquiryParam,
    ) -> Result<Inquiry, AppError> {
        let repo = InquiryRepository::new(self.db);

        let existing = repo.find_by_id(inquiry_id).await?.ok_or_else(not_found)?;
        self.ensure_can_manage(actor, &existing, "Not authorized to update this inquiry")
            .await?;

        let response = param.response.clone();
        let inquiry = repo
            .update(inquiry_id, param, actor.id)
            .await?
            .ok_or_else(not_found)?;

        if let Some(response) = response {
            self.deliver(mailer::inquiry_response(&inquiry, &response))
                .await;
        }

        Ok(inquiry)
    }

    /// Permanently deletes an inquiry.
    pub async fn delete(&self, inquiry_id: i32) -> Result<(), AppError> {
        if !InquiryRepository::new(self.db).delete(inquiry_id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Admins manage every inquiry, agents only those on their own listings.
    async fn ensure_can_manage(
        &self,
        actor: &User,
        inquiry: &Inquiry,
        message: &str,
    ) -> Result<(), AppError> {
        if actor.is_admin() {
            return Ok(());
        }

        let owns_property = PropertyRepository::new(self.db)
            .find_by_id(inquiry.property_id)
            .await?
            .is_some_and(|property| property.is_owned_by(actor.id));

        if owns_property {
            Ok(())
        } else {
            Err(AuthError::AccessDenied(actor.id, message.to_string()).into())
        }
    }

    async fn deliver(&self, email: Email) {
        if let Err(err) = self.mailer.send(email).await {
            tracing::error!("{}", err);
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Inquiry not found".to_string())
}
