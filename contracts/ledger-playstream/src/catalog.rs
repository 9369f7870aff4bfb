//! Video catalog: publication and indexed lookup by publisher.

use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use crate::id;
use crate::state::LedgerState;
use crate::types::{Video, VideoView, MAX_CONTENT_HASH_BYTES};
use near_sdk::json_types::U64;
use near_sdk::{env, log, AccountId};

/// Registers a video under the id derived from its content hash. There is no
/// update or delete: re-publishing the same hash is rejected, and price and
/// reward stay as published.
pub fn publish_video(
    state: &mut LedgerState,
    caller: &AccountId,
    publisher: &AccountId,
    content_hash: String,
    price: u32,
    reward: u32,
) -> Result<U64, LedgerError> {
    if caller != publisher {
        return Err(LedgerError::caller_mismatch(publisher));
    }
    if content_hash.len() >= MAX_CONTENT_HASH_BYTES {
        return Err(LedgerError::InvalidInput(format!(
            "Content hash must be shorter than {} bytes",
            MAX_CONTENT_HASH_BYTES
        )));
    }

    let video_id = id::derive(content_hash.as_bytes());
    if state.videos.contains_key(&video_id) {
        return Err(LedgerError::AlreadyExists(format!(
            "Video already published: {}",
            content_hash
        )));
    }
    // Purchases route revenue to the publisher's account, so it must exist
    // before anything can be sold.
    state.account(publisher)?;

    state.videos.insert(
        video_id,
        Video {
            publisher: publisher.clone(),
            content_hash: content_hash.clone(),
            price,
            reward,
            order_count: 0,
            created_at: env::block_timestamp_ms(),
        },
    );
    state.index_video(publisher, video_id);

    log!("Published video {} by {}, id={}", content_hash, publisher, video_id);
    LedgerEvent::VideoPublished {
        publisher: publisher.clone(),
        video_id: video_id.into(),
        content_hash,
        price,
        reward,
    }
    .emit();
    Ok(video_id.into())
}

pub fn get_video(state: &LedgerState, video_id: u64) -> Option<VideoView> {
    state
        .videos
        .get(&video_id)
        .map(|video| view(video_id, video))
}

pub fn get_video_by_hash(state: &LedgerState, content_hash: &str) -> Option<VideoView> {
    get_video(state, id::derive(content_hash.as_bytes()))
}

pub fn get_videos_by_publisher(state: &LedgerState, publisher: &AccountId) -> Vec<VideoView> {
    state
        .videos_by_publisher
        .get(publisher)
        .map(|ids| {
            ids.iter()
                .filter_map(|video_id| get_video(state, *video_id))
                .collect()
        })
        .unwrap_or_default()
}

fn view(video_id: u64, video: &Video) -> VideoView {
    VideoView {
        id: video_id.into(),
        publisher: video.publisher.clone(),
        content_hash: video.content_hash.clone(),
        price: video.price,
        reward: video.reward,
        order_count: video.order_count,
        created_at: video.created_at.into(),
    }
}
