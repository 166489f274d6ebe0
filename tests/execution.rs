//! Code execution integration tests.
//!
//! The server proxies `compileCode` requests to an external execution
//! service; these tests stand up a stub service in-process and verify the
//! broadcast of results and failures.

mod fixtures;
use fixtures::{
    TestServer, assert_silent, connect_ws, recv_event, send_json, start_stub_execution_server,
};

use std::time::Duration;

use serde_json::json;

#[tokio::test]
async fn test_compile_code_broadcasts_result_to_room() {
    // テスト項目: 実行結果 codeResponse がルーム全員（送信者含む）に届く
    // given (前提条件): alice と bob が r1 に参加している
    let stub_url =
        start_stub_execution_server(19250, 200, json!({"run": {"output": "1\n"}})).await;
    let server = TestServer::start_with_execution_url(19200, stub_url).await;

    let mut alice = connect_ws(&server).await;
    send_json(
        &mut alice,
        json!({"type": "join", "roomId": "r1", "userName": "alice"}),
    )
    .await;
    recv_event(&mut alice, "roomState").await;
    recv_event(&mut alice, "userJoined").await;

    let mut bob = connect_ws(&server).await;
    send_json(
        &mut bob,
        json!({"type": "join", "roomId": "r1", "userName": "bob"}),
    )
    .await;
    recv_event(&mut bob, "roomState").await;
    recv_event(&mut bob, "userJoined").await;
    recv_event(&mut alice, "userJoined").await;

    // when (操作): alice がコードの実行を要求する
    send_json(
        &mut alice,
        json!({
            "type": "compileCode",
            "code": "print(1)",
            "roomId": "r1",
            "language": "python",
            "version": "3.10",
        }),
    )
    .await;

    // then (期待する結果): 送信者とルームの他メンバーの両方が結果を受信する
    let to_alice = recv_event(&mut alice, "codeResponse").await;
    assert_eq!(to_alice["run"]["output"], "1\n");
    let to_bob = recv_event(&mut bob, "codeResponse").await;
    assert_eq!(to_bob["run"]["output"], "1\n");

    // 最後の実行結果がルームに保存されている
    let client = reqwest::Client::new();
    let detail: serde_json::Value = client
        .get(format!("{}/api/rooms/r1", server.base_url()))
        .send()
        .await
        .expect("Failed to query room detail")
        .json()
        .await
        .expect("Failed to parse room detail");
    assert_eq!(detail["last_output"], "1\n");
}

#[tokio::test]
async fn test_execution_failure_broadcasts_execution_error() {
    // テスト項目: 実行サービスの失敗は executionError としてルームに通知される
    // given (前提条件): 実行サービスが 500 を返す
    let stub_url =
        start_stub_execution_server(19251, 500, json!({"message": "internal error"})).await;
    let server = TestServer::start_with_execution_url(19201, stub_url).await;

    let mut alice = connect_ws(&server).await;
    send_json(
        &mut alice,
        json!({"type": "join", "roomId": "r1", "userName": "alice"}),
    )
    .await;
    recv_event(&mut alice, "roomState").await;

    let mut bob = connect_ws(&server).await;
    send_json(
        &mut bob,
        json!({"type": "join", "roomId": "r1", "userName": "bob"}),
    )
    .await;
    recv_event(&mut bob, "roomState").await;

    // when (操作): bob がコードの実行を要求する
    send_json(
        &mut bob,
        json!({
            "type": "compileCode",
            "code": "print(1)",
            "roomId": "r1",
            "language": "python",
            "version": "3.10",
        }),
    )
    .await;

    // then (期待する結果): ルーム全員が executionError を受信する
    let to_bob = recv_event(&mut bob, "executionError").await;
    assert!(to_bob["message"].is_string());
    let to_alice = recv_event(&mut alice, "executionError").await;
    assert_eq!(to_alice["message"], to_bob["message"]);
}

#[tokio::test]
async fn test_compile_code_for_unknown_room_errors_sender_only() {
    // テスト項目: 存在しないルームへの実行要求は送信者だけにエラーを返す
    // given (前提条件): alice が r1 に参加している
    let stub_url =
        start_stub_execution_server(19252, 200, json!({"run": {"output": "ok\n"}})).await;
    let server = TestServer::start_with_execution_url(19202, stub_url).await;

    let mut alice = connect_ws(&server).await;
    send_json(
        &mut alice,
        json!({"type": "join", "roomId": "r1", "userName": "alice"}),
    )
    .await;
    recv_event(&mut alice, "roomState").await;
    recv_event(&mut alice, "userJoined").await;

    let mut bob = connect_ws(&server).await;
    send_json(
        &mut bob,
        json!({"type": "join", "roomId": "r1", "userName": "bob"}),
    )
    .await;
    recv_event(&mut bob, "roomState").await;
    recv_event(&mut bob, "userJoined").await;
    recv_event(&mut alice, "userJoined").await;

    // when (操作): alice が存在しないルームを指定して実行を要求する
    send_json(
        &mut alice,
        json!({
            "type": "compileCode",
            "code": "print(1)",
            "roomId": "ghost",
            "language": "python",
            "version": "3.10",
        }),
    )
    .await;

    // then (期待する結果): alice にだけ error が届き、bob には何も届かない
    let error = recv_event(&mut alice, "error").await;
    assert!(
        error["message"]
            .as_str()
            .expect("message should be a string")
            .contains("ghost")
    );
    assert_silent(&mut bob, Duration::from_millis(300)).await;
}
