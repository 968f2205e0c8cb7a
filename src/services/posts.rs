// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity post repository.

use std::sync::Arc;
use validator::Validate;

use crate::db::{Document, DocumentStore};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::post::add_rsvp;
use crate::models::{new_id, Comment, CommentDraft, Post, PostDraft, PostUpdate};

#[derive(Clone)]
pub struct PostRepository {
    store: Arc<DocumentStore>,
}

fn find_post<'a>(doc: &'a mut Document, id: &str) -> Result<&'a mut Post> {
    doc.posts
        .iter_mut()
        .find(|post| post.id == id)
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
}

impl PostRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// All posts, most recently created first.
    pub async fn list(&self) -> Vec<Post> {
        self.store.read(|doc| doc.posts.clone()).await
    }

    pub async fn create(&self, draft: PostDraft, caller: &AuthUser) -> Result<Post> {
        draft.validate()?;

        let post = Post {
            id: new_id(),
            title: draft.title.unwrap_or_default(),
            activity: draft.activity.unwrap_or_default(),
            when: draft.when.unwrap_or_default(),
            location: draft.location.unwrap_or_default(),
            spots: draft.spots,
            details: draft.details.unwrap_or_default(),
            author_id: caller.user_id.clone(),
            author: caller.name.clone(),
            likes: 0,
            rsvps: Vec::new(),
            comments: Vec::new(),
        };

        self.store
            .mutate(|doc| {
                doc.posts.insert(0, post.clone());
                Ok::<_, AppError>(())
            })
            .await?;

        tracing::info!(post_id = %post.id, user_id = %caller.user_id, "Post created");
        Ok(post)
    }

    /// Author-only edit of the whitelisted fields.
    pub async fn update(&self, id: &str, update: PostUpdate, caller: &AuthUser) -> Result<Post> {
        update.validate()?;

        self.store
            .mutate(|doc| {
                let post = find_post(doc, id)?;
                if post.author_id != caller.user_id {
                    tracing::warn!(
                        post_id = %id,
                        user_id = %caller.user_id,
                        "Rejected post edit by non-author"
                    );
                    return Err(AppError::Forbidden("Forbidden".to_string()));
                }
                update.apply(post);
                Ok(post.clone())
            })
            .await
    }

    /// Increment the like counter. Repeat likes by one caller all count.
    pub async fn like(&self, id: &str, caller: &AuthUser) -> Result<u64> {
        let likes = self
            .store
            .mutate(|doc| {
                let post = find_post(doc, id)?;
                post.likes += 1;
                Ok::<_, AppError>(post.likes)
            })
            .await?;

        tracing::debug!(post_id = %id, user_id = %caller.user_id, likes, "Post liked");
        Ok(likes)
    }

    /// Add the caller's display name to the RSVP list (idempotent).
    pub async fn rsvp(&self, id: &str, caller: &AuthUser) -> Result<Vec<String>> {
        self.store
            .mutate(|doc| {
                let post = find_post(doc, id)?;
                add_rsvp(&mut post.rsvps, &caller.name);
                Ok::<_, AppError>(post.rsvps.clone())
            })
            .await
    }

    /// Prepend a comment. Returns the new comment and the full list.
    pub async fn comment(
        &self,
        id: &str,
        draft: CommentDraft,
        caller: &AuthUser,
    ) -> Result<(Comment, Vec<Comment>)> {
        draft.validate()?;
        let comment = Comment::new(&caller.name, draft.text.unwrap_or_default());

        self.store
            .mutate(|doc| {
                let post = find_post(doc, id)?;
                post.comments.insert(0, comment.clone());
                Ok::<_, AppError>((comment, post.comments.clone()))
            })
            .await
    }
}
