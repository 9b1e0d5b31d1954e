use super::request::Credentials;
use super::request::Submission;
use super::response;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use crate::board::Point;
use crate::moves::Variant;
use crate::session::Lobby;
use crate::session::Session;
use std::sync::Arc;

/// Everything the route handlers share: the seat pool and the variant
/// the engine was built for.
pub struct House {
    pub lobby: Lobby,
    pub variant: Variant,
}

pub struct Server;

impl Server {
    pub async fn run(house: House, bind: &str) -> Result<(), std::io::Error> {
        let house = web::Data::new(house);
        log::info!("starting {} game server", house.variant);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(house.clone())
                .route("/", web::get().to(main_page))
                .route("/login", web::post().to(login))
                .route("/logout", web::post().to(logout))
                .route("/sendRequest", web::get().to(send_request))
                .route("/getRequest", web::post().to(get_request))
        })
        .workers(num_cpus::get())
        .bind(bind)?
        .run()
        .await
    }
}

fn to_login() -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", "/login"))
        .finish()
}

fn seat(house: &House, auth: &Credentials) -> Option<Arc<Session>> {
    house.lobby.authorize(auth.id, auth.pass)
}

// Route handlers

async fn main_page(house: web::Data<House>, auth: web::Query<Credentials>) -> impl Responder {
    match seat(&house, &auth) {
        Some(_) => HttpResponse::Ok().json(serde_json::json!({ "status": "ready" })),
        None => to_login(),
    }
}

async fn login(house: web::Data<House>) -> impl Responder {
    match house.lobby.login() {
        Some((id, pass)) => {
            HttpResponse::Ok().json(serde_json::json!({ "user_id": id, "pass": pass }))
        }
        None => HttpResponse::ServiceUnavailable().body("no free seat"),
    }
}

async fn logout(house: web::Data<House>, auth: web::Query<Credentials>) -> impl Responder {
    house.lobby.logout(auth.id, auth.pass);
    HttpResponse::Ok().json(serde_json::json!({ "status": "left" }))
}

/// Long poll for the current position: parks until the engine has
/// published anything for this seat, then renders it.
async fn send_request(house: web::Data<House>, auth: web::Query<Credentials>) -> impl Responder {
    let Some(session) = seat(&house, &auth) else {
        return to_login();
    };
    match web::block(move || session.observe()).await {
        Ok(observation) => {
            HttpResponse::Ok().json(response::board(&observation, house.variant, auth.id))
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// A player's turn: queue the chosen action, then long poll for the
/// position the engine advances to. Illegal choices are rejected with
/// the reason instead of leaving the caller parked forever.
async fn get_request(
    house: web::Data<House>,
    auth: web::Query<Credentials>,
    body: web::Json<Submission>,
) -> impl Responder {
    let Some(session) = seat(&house, &auth) else {
        return to_login();
    };
    if session.expired() {
        session.expire();
        return to_login();
    }
    if let Some(action) = body.reset.or(body.change_side) {
        session.steer(action);
    } else {
        let pair = match (body.move_from.as_deref(), body.move_to.as_deref()) {
            (Some(from), Some(till)) => Point::try_from(from).and_then(|f| {
                Point::try_from(till).map(|t| (f, t))
            }),
            _ => Err("missing move labels"),
        };
        let queued = match pair {
            Ok((from, till)) => session.submit(from, till).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        if let Err(reason) = queued {
            return HttpResponse::BadRequest().body(reason);
        }
    }
    match web::block(move || session.refresh()).await {
        Ok(observation) => {
            HttpResponse::Ok().json(response::board(&observation, house.variant, auth.id))
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
