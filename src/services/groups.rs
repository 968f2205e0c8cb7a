// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Group repository: groups, their nested events, and forum topics.
//!
//! Ownership is fixed at creation (`created_by`). Only the owner may add
//! events; any member may post forum topics; any authenticated user may
//! join, RSVP to events, and comment on them.

use std::sync::Arc;
use validator::Validate;

use crate::db::{Document, DocumentStore};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::post::add_rsvp;
use crate::models::{
    new_id, Comment, CommentDraft, Event, EventDraft, Group, GroupDraft, Topic, TopicDraft,
    UpcomingEvent,
};

#[derive(Clone)]
pub struct GroupRepository {
    store: Arc<DocumentStore>,
}

fn group_not_found() -> AppError {
    AppError::NotFound("Group not found".to_string())
}

fn find_group<'a>(doc: &'a mut Document, id: &str) -> Result<&'a mut Group> {
    doc.groups
        .iter_mut()
        .find(|group| group.id == id)
        .ok_or_else(group_not_found)
}

fn find_event<'a>(
    doc: &'a mut Document,
    group_id: &str,
    event_id: &str,
) -> Result<&'a mut Event> {
    find_group(doc, group_id)?
        .events
        .iter_mut()
        .find(|event| event.id == event_id)
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
}

impl GroupRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Group> {
        self.store.read(|doc| doc.groups.clone()).await
    }

    pub async fn get(&self, id: &str) -> Result<Group> {
        self.store
            .read(|doc| doc.groups.iter().find(|group| group.id == id).cloned())
            .await
            .ok_or_else(group_not_found)
    }

    /// Create a group owned by the caller, who becomes its only member.
    pub async fn create(&self, draft: GroupDraft, caller: &AuthUser) -> Result<Group> {
        draft.validate()?;

        let admins = draft.admin_names(&caller.name);
        let events = draft.seed_event().into_iter().collect();

        let group = Group {
            id: new_id(),
            name: draft.name.unwrap_or_default(),
            focus: draft.focus.unwrap_or_default(),
            admins,
            forum: draft.forum.unwrap_or_default(),
            created_by: caller.user_id.clone(),
            members: vec![caller.user_id.clone()],
            events,
            topics: Vec::new(),
        };

        self.store
            .mutate(|doc| {
                doc.groups.insert(0, group.clone());
                Ok::<_, AppError>(())
            })
            .await?;

        tracing::info!(group_id = %group.id, user_id = %caller.user_id, "Group created");
        Ok(group)
    }

    /// Add the caller to the members (idempotent). Returns the member count.
    pub async fn join(&self, id: &str, caller: &AuthUser) -> Result<usize> {
        let member_count = self
            .store
            .mutate(|doc| {
                let group = find_group(doc, id)?;
                if !group.is_member(&caller.user_id) {
                    group.members.push(caller.user_id.clone());
                }
                Ok::<_, AppError>(group.members.len())
            })
            .await?;

        tracing::info!(group_id = %id, user_id = %caller.user_id, member_count, "Group joined");
        Ok(member_count)
    }

    /// Owner-only. Returns the new event and the group's event list.
    pub async fn add_event(
        &self,
        id: &str,
        draft: EventDraft,
        caller: &AuthUser,
    ) -> Result<(Event, Vec<Event>)> {
        draft.validate()?;
        let event = draft.into_event();

        let result = self
            .store
            .mutate(|doc| {
                let group = find_group(doc, id)?;
                if !group.is_owner(&caller.user_id) {
                    tracing::warn!(
                        group_id = %id,
                        user_id = %caller.user_id,
                        "Rejected event creation by non-owner"
                    );
                    return Err(AppError::Forbidden("Only owner can add events".to_string()));
                }
                group.events.insert(0, event.clone());
                Ok((event, group.events.clone()))
            })
            .await?;

        tracing::info!(group_id = %id, event_id = %result.0.id, "Group event created");
        Ok(result)
    }

    pub async fn rsvp_event(
        &self,
        group_id: &str,
        event_id: &str,
        caller: &AuthUser,
    ) -> Result<Vec<String>> {
        self.store
            .mutate(|doc| {
                let event = find_event(doc, group_id, event_id)?;
                add_rsvp(&mut event.rsvps, &caller.name);
                Ok::<_, AppError>(event.rsvps.clone())
            })
            .await
    }

    pub async fn comment_event(
        &self,
        group_id: &str,
        event_id: &str,
        draft: CommentDraft,
        caller: &AuthUser,
    ) -> Result<(Comment, Vec<Comment>)> {
        draft.validate()?;
        let comment = Comment::new(&caller.name, draft.text.unwrap_or_default());

        self.store
            .mutate(|doc| {
                let event = find_event(doc, group_id, event_id)?;
                event.comments.insert(0, comment.clone());
                Ok::<_, AppError>((comment, event.comments.clone()))
            })
            .await
    }

    /// Member-only forum post. Returns the new topic and the full list.
    pub async fn create_topic(
        &self,
        id: &str,
        draft: TopicDraft,
        caller: &AuthUser,
    ) -> Result<(Topic, Vec<Topic>)> {
        draft.validate()?;
        let topic = draft.into_topic();

        self.store
            .mutate(|doc| {
                let group = find_group(doc, id)?;
                if !group.is_member(&caller.user_id) {
                    tracing::warn!(
                        group_id = %id,
                        user_id = %caller.user_id,
                        "Rejected forum topic from non-member"
                    );
                    return Err(AppError::Forbidden(
                        "Only members can post topics".to_string(),
                    ));
                }
                group.topics.insert(0, topic.clone());
                Ok((topic, group.topics.clone()))
            })
            .await
    }

    /// Every event, across all groups, that the caller has RSVP'd to.
    pub async fn upcoming_events(&self, caller: &AuthUser) -> Vec<UpcomingEvent> {
        self.store
            .read(|doc| {
                doc.groups
                    .iter()
                    .flat_map(|group| {
                        group
                            .events
                            .iter()
                            .filter(move |event| {
                                event.rsvps.iter().any(|name| *name == caller.name)
                            })
                            .map(move |event| UpcomingEvent {
                                event: event.clone(),
                                group_name: group.name.clone(),
                            })
                    })
                    .collect()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(id: &str, name: &str) -> AuthUser {
        AuthUser {
            user_id: id.to_string(),
            email: format!("{id}@x.com"),
            name: name.to_string(),
        }
    }

    fn repo() -> GroupRepository {
        GroupRepository::new(Arc::new(DocumentStore::in_memory()))
    }

    fn named(name: &str) -> GroupDraft {
        GroupDraft {
            name: Some(name.to_string()),
            ..GroupDraft::default()
        }
    }

    fn event(title: &str) -> EventDraft {
        EventDraft {
            title: Some(title.to_string()),
            ..EventDraft::default()
        }
    }

    #[tokio::test]
    async fn test_creator_is_owner_and_sole_member() {
        let repo = repo();
        let group = repo
            .create(named("Trail Club"), &caller("u1", "Ari"))
            .await
            .unwrap();

        assert_eq!(group.created_by, "u1");
        assert_eq!(group.members, vec!["u1"]);
        assert_eq!(group.admins, vec!["Ari"]);
        assert!(group.events.is_empty());
    }

    #[tokio::test]
    async fn test_join_is_idempotent() {
        let repo = repo();
        let group = repo
            .create(named("Trail Club"), &caller("u1", "Ari"))
            .await
            .unwrap();
        let bo = caller("u2", "Bo");

        assert_eq!(repo.join(&group.id, &bo).await.unwrap(), 2);
        assert_eq!(repo.join(&group.id, &bo).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_only_owner_adds_events() {
        let repo = repo();
        let owner = caller("u1", "Ari");
        let member = caller("u2", "Bo");
        let group = repo.create(named("Trail Club"), &owner).await.unwrap();
        repo.join(&group.id, &member).await.unwrap();

        let err = repo
            .add_event(&group.id, event("Hill repeats"), &member)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let (created, events) = repo
            .add_event(&group.id, event("Hill repeats"), &owner)
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(created.visibility, "Group");
    }

    #[tokio::test]
    async fn test_missing_group_wins_over_ownership() {
        let err = repo()
            .add_event("missing", event("x"), &caller("u1", "Ari"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_event_is_not_found() {
        let repo = repo();
        let ari = caller("u1", "Ari");
        let group = repo.create(named("Trail Club"), &ari).await.unwrap();

        let err = repo.rsvp_event(&group.id, "missing", &ari).await.unwrap_err();
        assert_eq!(err.to_string(), "Event not found");
    }

    #[tokio::test]
    async fn test_topics_require_membership() {
        let repo = repo();
        let owner = caller("u1", "Ari");
        let outsider = caller("u2", "Bo");
        let group = repo.create(named("Trail Club"), &owner).await.unwrap();
        let draft = TopicDraft {
            topic: Some("Carpool".to_string()),
            category: None,
            message: Some("Anyone driving from Golden?".to_string()),
        };

        let err = repo
            .create_topic(&group.id, draft.clone(), &outsider)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        repo.join(&group.id, &outsider).await.unwrap();
        let (topic, topics) = repo.create_topic(&group.id, draft, &outsider).await.unwrap();
        assert_eq!(topic.category, "General");
        assert_eq!(topics.len(), 1);
    }

    #[tokio::test]
    async fn test_upcoming_events_span_groups() {
        let repo = repo();
        let owner = caller("u1", "Ari");
        let bo = caller("u2", "Bo");

        let climbing = repo.create(named("Climbers"), &owner).await.unwrap();
        let running = repo.create(named("Runners"), &owner).await.unwrap();
        let (crag, _) = repo
            .add_event(&climbing.id, event("Crag day"), &owner)
            .await
            .unwrap();
        let (tempo, _) = repo
            .add_event(&running.id, event("Tempo run"), &owner)
            .await
            .unwrap();
        repo.add_event(&running.id, event("Long run"), &owner)
            .await
            .unwrap();

        repo.rsvp_event(&climbing.id, &crag.id, &bo).await.unwrap();
        repo.rsvp_event(&running.id, &tempo.id, &bo).await.unwrap();

        let mut upcoming: Vec<(String, String)> = repo
            .upcoming_events(&bo)
            .await
            .into_iter()
            .map(|u| (u.group_name, u.event.title))
            .collect();
        upcoming.sort();

        assert_eq!(
            upcoming,
            vec![
                ("Climbers".to_string(), "Crag day".to_string()),
                ("Runners".to_string(), "Tempo run".to_string()),
            ]
        );
        assert!(repo.upcoming_events(&owner).await.is_empty());
    }
}
