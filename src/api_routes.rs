use actix_web::web;
use devshare_api::{
  community::{join::join_community, mute::mute_community, notify::notify_community},
  local_user::{
    follow::follow_person,
    login::login,
    notifications::{
      list::list_notifications,
      mark_all_read::mark_all_notifications_read,
      mark_read::mark_notification_as_read,
      unread_count::unread_count,
    },
    save_profile::save_profile,
  },
  post::{
    save::save_post,
    vote::{downvote_post, upvote_post},
  },
  relation::toggle_relation,
  site::{home_feed::get_home_feed, search::search_suggestions},
};
use devshare_api_crud::{
  comment::{
    create::create_comment,
    delete::delete_comment,
    list::list_comments,
    update::edit_comment,
  },
  community::{
    create::create_community,
    delete::delete_community,
    list::list_communities,
    members::list_community_members,
    read::get_community,
    update::edit_community,
  },
  post::{
    create::create_post,
    delete::delete_post,
    list::list_posts,
    read::get_post,
    saved::list_saved_posts,
    tags::list_tags,
    update::edit_post,
  },
  user::{
    create::register,
    follows::{list_followers, list_following},
    list::list_persons,
    read::get_person,
  },
};

/// Registers every API endpoint under `/api/v1`.
pub fn config(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // User
      .service(
        web::scope("/user")
          .route("", web::get().to(get_person))
          .route("/list", web::get().to(list_persons))
          .route("/register", web::post().to(register))
          .route("/login", web::post().to(login))
          .route("/profile", web::put().to(save_profile))
          .route("/follow", web::post().to(follow_person))
          .route("/followers", web::get().to(list_followers))
          .route("/following", web::get().to(list_following)),
      )
      // Community
      .service(
        web::scope("/community")
          .route("", web::get().to(get_community))
          .route("", web::post().to(create_community))
          .route("", web::put().to(edit_community))
          .route("/list", web::get().to(list_communities))
          .route("/delete", web::post().to(delete_community))
          .route("/members", web::get().to(list_community_members))
          .route("/join", web::post().to(join_community))
          .route("/mute", web::post().to(mute_community))
          .route("/notify", web::post().to(notify_community)),
      )
      // Post
      .service(
        web::scope("/post")
          .route("", web::get().to(get_post))
          .route("", web::post().to(create_post))
          .route("", web::put().to(edit_post))
          .route("/list", web::get().to(list_posts))
          .route("/delete", web::post().to(delete_post))
          .route("/saved", web::get().to(list_saved_posts))
          .route("/tags", web::get().to(list_tags))
          .route("/upvote", web::post().to(upvote_post))
          .route("/downvote", web::post().to(downvote_post))
          .route("/save", web::post().to(save_post))
          .route("/{post_id}/comment", web::get().to(list_comments))
          .route("/{post_id}/comment", web::post().to(create_comment)),
      )
      // Comment
      .service(
        web::scope("/comment")
          .route("", web::put().to(edit_comment))
          .route("/delete", web::post().to(delete_comment)),
      )
      // Notifications
      .service(
        web::scope("/notifications")
          .route("", web::get().to(list_notifications))
          .route("/mark_as_read", web::post().to(mark_notification_as_read))
          .route("/mark_all_as_read", web::post().to(mark_all_notifications_read))
          .route("/unread_count", web::get().to(unread_count)),
      )
      .route("/relation", web::post().to(toggle_relation))
      .route("/feed", web::get().to(get_home_feed))
      .route("/search/suggestions", web::get().to(search_suggestions)),
  );
}
