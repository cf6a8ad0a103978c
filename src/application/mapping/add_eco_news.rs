// src/application/mapping/add_eco_news.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AddEcoNewsDtoRequest, TagRefDto, TranslationRequestDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        eco_news::{EcoNews, EcoNewsDraft, TranslationDraft},
        language::LanguageRepository,
        tag::{Tag, TagRepository},
        user::{User, UserId, UserRepository},
    },
};

/// Turns an [`AddEcoNewsDtoRequest`] into an [`EcoNews`] entity.
///
/// Every reference in the request is resolved before the entity is
/// assembled, so a failed lookup never leaves a half-built item behind.
/// The entity is returned unsaved.
pub struct AddEcoNewsRequestMapper {
    user_repo: Arc<dyn UserRepository>,
    tag_repo: Arc<dyn TagRepository>,
    language_repo: Arc<dyn LanguageRepository>,
    clock: Arc<dyn Clock>,
}

impl AddEcoNewsRequestMapper {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        tag_repo: Arc<dyn TagRepository>,
        language_repo: Arc<dyn LanguageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            tag_repo,
            language_repo,
            clock,
        }
    }

    pub async fn convert(&self, request: AddEcoNewsDtoRequest) -> ApplicationResult<Arc<EcoNews>> {
        let AddEcoNewsDtoRequest {
            author,
            image_path,
            tags,
            translations,
        } = request;

        let author = self.resolve_author(author.id).await?;
        let creation_date = self.clock.now();
        let tags = self.resolve_tags(&tags).await?;
        let translations = self.resolve_translations(translations).await?;

        tracing::debug!(
            author_id = %author.id,
            tags = tags.len(),
            translations = translations.len(),
            "mapped eco news request"
        );

        Ok(EcoNewsDraft {
            creation_date,
            author,
            image_path,
            tags,
            translations,
        }
        .into_entity())
    }

    async fn resolve_author(&self, raw_id: i64) -> ApplicationResult<User> {
        // A non-positive id can never match a stored user.
        let Ok(id) = UserId::new(raw_id) else {
            tracing::warn!(author_id = raw_id, "author id is not a valid user id");
            return Err(ApplicationError::referenced_entity_not_found(raw_id));
        };

        self.user_repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(author_id = raw_id, "author not found");
            ApplicationError::referenced_entity_not_found(raw_id)
        })
    }

    async fn resolve_tags(&self, requested: &[TagRefDto]) -> ApplicationResult<Vec<Tag>> {
        let mut tags = Vec::with_capacity(requested.len());
        for tag in requested {
            let resolved = self.tag_repo.find_by_name(&tag.name).await?.ok_or_else(|| {
                tracing::warn!(tag = %tag.name, "tag not found");
                ApplicationError::tag_not_found(tag.name.as_str())
            })?;
            tags.push(resolved);
        }
        Ok(tags)
    }

    async fn resolve_translations(
        &self,
        requested: Vec<TranslationRequestDto>,
    ) -> ApplicationResult<Vec<TranslationDraft>> {
        let mut translations = Vec::with_capacity(requested.len());
        for translation in requested {
            let language = self
                .language_repo
                .find_by_code(&translation.language.code)
                .await?
                .ok_or_else(|| {
                    tracing::warn!(code = %translation.language.code, "language not found");
                    ApplicationError::InvalidLanguage
                })?;
            translations.push(TranslationDraft {
                language,
                title: translation.title,
                text: translation.text,
            });
        }
        Ok(translations)
    }
}
