use serde::Deserialize;

/// One team member as served by the constellation endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct TeamMember {
	pub id: String,
	pub name: String,
	pub score: f64,
	pub tier: String,
	pub size: f64,
	pub activity_level: f64,
	pub joined_days_ago: u32,
}

/// A relationship between two members. Endpoints are member ids and may
/// reference members that are not in the payload.
#[derive(Clone, Debug, Deserialize)]
pub struct MemberLink {
	pub source: String,
	pub target: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub weight: f64,
}

/// The full wire document: `{ "nodes": [...], "edges": [...] }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeamGraph {
	#[serde(default)]
	pub nodes: Vec<TeamMember>,
	#[serde(default)]
	pub edges: Vec<MemberLink>,
}
