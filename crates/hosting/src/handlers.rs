use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health(arena: web::Data<Arena>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "sessions": arena.manager().live(),
        "waiting": arena.manager().waiting(),
        "connections": arena.manager().connections(),
    }))
}
pub async fn play(arena: web::Data<Arena>, body: web::Payload, req: HttpRequest) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => match arena.into_inner().bridge(session, stream).await {
            Ok(conn) => {
                log::info!("[hosting] socket {} opened", conn.short());
                response.map_into_left_body()
            }
            Err(e) => HttpResponse::InternalServerError()
                .body(e.to_string())
                .map_into_right_body(),
        },
        Err(e) => HttpResponse::BadRequest()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
