//! End-to-end tests for inclusion policies against MemoryStore.
//!
//! Each test builds the same small company graph:
//!
//! ```text
//! (m:Employee {name:'Michal'})-[:WORKS_FOR {role:'Director', since:2013}]->(ga:Company {name:'GraphAware', form:'Ltd'})
//! (v:Intern {name:'Vojta', age:25})-[:WORKS_FOR {since:2014, until:2014}]->(ga)
//! (m)-[:LIVES_IN]->(l:Place {name:'London'})<-[:LIVES_IN]-(v)
//! ```

use std::sync::Arc;

use neo4j_policy::iterables::{count, count_nodes};
use neo4j_policy::{
    get_all_nodes, get_all_relationships, CompositeNodeInclusionPolicy, Direction, Graph,
    GraphStore, IncludeAllNodes, IncludeAllRelationships, IncludeNoNodes,
    IncludeNoRelationships, IncludeNodesWithLabels, IncludeRelationships, MemoryStore,
    NodeId, NodeInclusionPolicy, PolicyConfig, PropertyInclusionPolicy, PropertyMap,
    RelationshipInclusionPolicy, TxMode, Value,
};

// ============================================================================
// Helper: build the company graph
// ============================================================================

struct Company {
    graph: Graph<MemoryStore>,
    michal: NodeId,
    vojta: NodeId,
    london: NodeId,
}

fn props(pairs: &[(&str, Value)]) -> PropertyMap {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

async fn setup_company() -> Company {
    let graph = Graph::open_memory().await.unwrap();
    let mut tx = graph.begin(TxMode::ReadWrite).await.unwrap();
    let store = tx.store();

    let michal = store
        .create_node(tx.tx_mut(), &["Employee"], props(&[("name", "Michal".into())]))
        .await
        .unwrap();
    let ga = store
        .create_node(
            tx.tx_mut(),
            &["Company"],
            props(&[("name", "GraphAware".into()), ("form", "Ltd".into())]),
        )
        .await
        .unwrap();
    let vojta = store
        .create_node(
            tx.tx_mut(),
            &["Intern"],
            props(&[("name", "Vojta".into()), ("age", 25.into())]),
        )
        .await
        .unwrap();
    let london = store
        .create_node(tx.tx_mut(), &["Place"], props(&[("name", "London".into())]))
        .await
        .unwrap();

    store
        .create_relationship(
            tx.tx_mut(),
            michal,
            ga,
            "WORKS_FOR",
            props(&[("role", "Director".into()), ("since", 2013.into())]),
        )
        .await
        .unwrap();
    store
        .create_relationship(
            tx.tx_mut(),
            vojta,
            ga,
            "WORKS_FOR",
            props(&[("since", 2014.into()), ("until", 2014.into())]),
        )
        .await
        .unwrap();
    store
        .create_relationship(tx.tx_mut(), michal, london, "LIVES_IN", PropertyMap::new())
        .await
        .unwrap();
    store
        .create_relationship(tx.tx_mut(), vojta, london, "LIVES_IN", PropertyMap::new())
        .await
        .unwrap();

    tx.commit().await.unwrap();
    Company { graph, michal, vojta, london }
}

// ============================================================================
// 1. Trivial singletons over every node
// ============================================================================

#[tokio::test]
async fn test_include_no_nodes() {
    let company = setup_company().await;
    let store = company.graph.store();
    let tx = store.begin_tx(TxMode::ReadOnly).await.unwrap();

    for node in store.all_nodes(&tx).await.unwrap() {
        assert!(!IncludeNoNodes::instance().include(&node));
    }
    store.commit_tx(tx).await.unwrap();
}

#[tokio::test]
async fn test_get_no_nodes() {
    let company = setup_company().await;
    let store = company.graph.store();
    let tx = store.begin_tx(TxMode::ReadOnly).await.unwrap();

    let nodes = get_all_nodes(IncludeNoNodes::instance(), store, &tx).await.unwrap();
    assert_eq!(count(&nodes), 0);
}

#[tokio::test]
async fn test_include_all_nodes() {
    let company = setup_company().await;
    let store = company.graph.store();
    let tx = store.begin_tx(TxMode::ReadOnly).await.unwrap();

    for node in store.all_nodes(&tx).await.unwrap() {
        assert!(IncludeAllNodes::instance().include(&node));
    }
    let included = get_all_nodes(IncludeAllNodes::instance(), store, &tx).await.unwrap();
    assert_eq!(included.len() as u64, count_nodes(store, &tx).await.unwrap());
    assert_eq!(included.len(), 4);
}

#[tokio::test]
async fn test_all_and_no_relationships() {
    let company = setup_company().await;

    let all = company.graph.included_relationships(IncludeAllRelationships::instance()).await.unwrap();
    assert_eq!(all.len(), 4);

    let none = company.graph.included_relationships(IncludeNoRelationships::instance()).await.unwrap();
    assert!(none.is_empty());
}

// ============================================================================
// 2. Label / type / direction filters
// ============================================================================

#[tokio::test]
async fn test_nodes_with_labels() {
    let company = setup_company().await;
    let people = IncludeNodesWithLabels::new(["Employee", "Intern"]).unwrap();

    let nodes = company.graph.included_nodes(&people).await.unwrap();
    let ids: Vec<NodeId> = nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![company.michal, company.vojta]);
}

#[tokio::test]
async fn test_relationships_by_type() {
    let company = setup_company().await;
    let store = company.graph.store();
    let tx = store.begin_tx(TxMode::ReadOnly).await.unwrap();

    let lives_in = IncludeRelationships::new(["LIVES_IN"]).unwrap();
    let rels = get_all_relationships(&lives_in, store, &tx).await.unwrap();
    assert_eq!(rels.len(), 2);
    assert!(rels.iter().all(|r| r.dst == company.london));
}

#[tokio::test]
async fn test_relationship_direction_from_point_of_view() {
    let company = setup_company().await;
    let incoming = IncludeRelationships::new(["LIVES_IN"])
        .unwrap()
        .with_direction(Direction::Incoming);

    let rels = company.graph.included_relationships(IncludeAllRelationships::instance()).await.unwrap();
    let from_london = rels.iter().filter(|r| incoming.include_from(r, company.london)).count();
    let from_michal = rels.iter().filter(|r| incoming.include_from(r, company.michal)).count();

    assert_eq!(from_london, 2);
    assert_eq!(from_michal, 0);
}

// ============================================================================
// 3. Composites and configuration
// ============================================================================

#[tokio::test]
async fn test_composite_with_veto() {
    let company = setup_company().await;
    let composite = CompositeNodeInclusionPolicy::of([
        Arc::new(IncludeNodesWithLabels::new(["Place"]).unwrap()) as Arc<dyn NodeInclusionPolicy>,
        Arc::new(IncludeNoNodes),
    ]);

    let nodes = company.graph.included_nodes(&composite).await.unwrap();
    assert!(nodes.is_empty());
}

#[tokio::test]
async fn test_policies_from_config() {
    let company = setup_company().await;
    let policies = PolicyConfig::from_json(
        r#"{
            "nodes": { "labels": ["Intern"] },
            "relationships": { "types": ["WORKS_FOR"], "direction": "Outgoing" },
            "relationship_properties": { "keys": ["since"] }
        }"#,
    )
    .unwrap()
    .build()
    .unwrap();

    let nodes = company.graph.included_nodes(policies.nodes()).await.unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id, company.vojta);

    let rels = company.graph.included_relationships(policies.relationships()).await.unwrap();
    assert_eq!(rels.len(), 2);
    assert!(rels.iter().all(|r| policies.relationships().include_from(r, r.src)));

    let vojta_works = rels.iter().find(|r| r.src == company.vojta).unwrap();
    let kept: Vec<&str> = {
        let mut keys: Vec<&str> = vojta_works
            .properties
            .keys()
            .map(String::as_str)
            .filter(|k| policies.relationship_properties().include(k, vojta_works))
            .collect();
        keys.sort();
        keys
    };
    assert_eq!(kept, vec!["since"]);
}
