use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn check_database(db: &DatabaseConnection) -> &'static str {
    match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: database check failed");
            "unhealthy"
        }
    }
}

async fn check_redis(pool: &Pool) -> &'static str {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!(error = %e, "Readiness: redis pool unavailable");
            return "unhealthy";
        }
    };

    match deadpool_redis::redis::cmd("PING")
        .query_async::<String>(&mut conn)
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: redis PING failed");
            "unhealthy"
        }
    }
}

/// READINESS PROBE
/// - Database `SELECT 1`
/// - Redis `PING`
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let database = check_database(&db).await;
    let redis = check_redis(&redis).await;

    if database == "ok" && redis == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
            redis,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
            redis,
        })
    }
}
